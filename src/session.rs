//! Touch tracking and the countdown state machine.
//!
//! The session moves through `idle → countdown → winner → idle`. Every input
//! returns a [`Schedule`] telling the caller what to do with its one-shot
//! expiry timer; the timer hands its [`ExpiryTicket`] back to
//! [`Session::expire`], which ignores tickets that no longer match.

use crate::colors::{Color, ColorPool};
use crate::config::{AppConfig, APP_VERSION, COUNTDOWN_MS, WINNER_ZOOM_MS};
use crate::frame::{EdgeFill, Frame, Marker};
use crate::i18n::{Language, Messages};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pointer identifier assigned by the input system.
pub type TouchId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Touch {
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Idle,
    Countdown,
    Winner,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Countdown => write!(f, "countdown"),
            SessionState::Winner => write!(f, "winner"),
        }
    }
}

/// Identifies one countdown attempt. A restart always issues a new ticket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryTicket {
    pub generation: u64,
    pub started_at: f64,
    pub due_at: f64,
}

impl ExpiryTicket {
    /// Milliseconds until the ticket is due, rounded up.
    pub fn delay_ms(&self, now: f64) -> u32 {
        (self.due_at - now).max(0.0).ceil() as u32
    }
}

/// What the caller must do with its pending expiry timer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Schedule {
    /// Leave the current timer (if any) alone.
    Keep,
    /// Drop the pending timer.
    Cancel,
    /// Replace any pending timer with one firing at `due_at`.
    Arm(ExpiryTicket),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownProgress {
    /// Elapsed share of the countdown, in `[0, 1]`.
    pub progress: f64,
    pub remaining_ms: f64,
}

impl CountdownProgress {
    fn between(started_at: f64, now: f64) -> Self {
        let progress = ((now - started_at) / COUNTDOWN_MS).clamp(0.0, 1.0);
        Self {
            progress,
            remaining_ms: COUNTDOWN_MS * (1.0 - progress),
        }
    }
}

pub struct Session<R = StdRng> {
    /// Insertion ordered; the winner is drawn by index over this list.
    touches: Vec<(TouchId, Touch)>,
    colors: ColorPool,
    state: SessionState,
    countdown: Option<ExpiryTicket>,
    generation: u64,
    winner: Option<TouchId>,
    winner_since: Option<f64>,
    last_count: usize,
    min_touches: usize,
    language: Language,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: &AppConfig, rng: R) -> Self {
        Self {
            touches: Vec::new(),
            colors: ColorPool::default(),
            state: SessionState::Idle,
            countdown: None,
            generation: 0,
            winner: None,
            winner_since: None,
            last_count: 0,
            min_touches: config.min_touch_count(),
            language: config.language,
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn winner(&self) -> Option<TouchId> {
        self.winner
    }

    pub fn active_count(&self) -> usize {
        self.touches.len()
    }

    pub fn min_touch_count(&self) -> usize {
        self.min_touches
    }

    pub fn touch(&self, id: TouchId) -> Option<&Touch> {
        self.index_of(id).map(|i| &self.touches[i].1)
    }

    pub fn touch_ids(&self) -> impl Iterator<Item = TouchId> + '_ {
        self.touches.iter().map(|(id, _)| *id)
    }

    pub fn colors(&self) -> &ColorPool {
        &self.colors
    }

    /// Ticket of the running countdown, if any.
    pub fn pending_expiry(&self) -> Option<ExpiryTicket> {
        self.countdown
    }

    pub fn touch_begin(&mut self, id: TouchId, x: f64, y: f64, now: f64) -> Schedule {
        if self.index_of(id).is_some() {
            debug!("Ignoring duplicate touch-begin for id {}", id);
            return Schedule::Keep;
        }
        let color = self.colors.take();
        self.touches.push((id, Touch { x, y, color }));
        debug!("Touch {} began at ({:.0}, {:.0}) with {}", id, x, y, color);
        self.on_count_change(now)
    }

    /// Returns `false` for an untracked id.
    pub fn touch_move(&mut self, id: TouchId, x: f64, y: f64) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        let touch = &mut self.touches[i].1;
        touch.x = x;
        touch.y = y;
        true
    }

    /// Returns `None` for an untracked id.
    pub fn touch_end(&mut self, id: TouchId, now: f64) -> Option<Schedule> {
        let Some(i) = self.index_of(id) else {
            debug!("Ignoring touch-end for unknown id {}", id);
            return None;
        };
        let (_, touch) = self.touches.remove(i);
        // The fallback color can be shared; keep it out of the pool while held.
        if !self.touches.iter().any(|(_, t)| t.color == touch.color) {
            self.colors.give_back(touch.color);
        }
        if self.touches.is_empty() {
            self.clear_selection();
        }
        Some(self.on_count_change(now))
    }

    /// Called by the expiry timer. Stale tickets are no-ops.
    pub fn expire(&mut self, ticket: ExpiryTicket) -> Schedule {
        if self.state != SessionState::Countdown || self.countdown != Some(ticket) {
            debug!(
                "Ignoring stale countdown expiry (generation {})",
                ticket.generation
            );
            return Schedule::Keep;
        }
        if self.touches.len() < self.min_touches {
            return self.enter_idle(false);
        }
        match self.choose_winner() {
            Some(id) => self.enter_winner(id, ticket.due_at),
            None => self.enter_idle(false),
        }
    }

    pub fn countdown_progress(&self, now: f64) -> Option<CountdownProgress> {
        if self.state != SessionState::Countdown {
            return None;
        }
        self.countdown
            .map(|ticket| CountdownProgress::between(ticket.started_at, now))
    }

    /// Rendering instructions for the current instant.
    pub fn frame(&self, now: f64) -> Frame {
        let messages = Messages::for_language(self.language);
        let (prompt, fill) = match (self.state, self.countdown_progress(now)) {
            (SessionState::Winner, _) => (messages.chosen.to_string(), EdgeFill::default()),
            (SessionState::Countdown, Some(p)) => (
                messages.countdown_label(p.remaining_ms, self.language),
                EdgeFill::uniform(1.0 - p.progress),
            ),
            _ => (messages.prompt_touch.to_string(), EdgeFill::default()),
        };

        let zooming = self
            .winner_since
            .is_some_and(|since| now - since < WINNER_ZOOM_MS);
        let markers = self
            .touches
            .iter()
            .map(|(id, touch)| {
                let winner = self.winner == Some(*id);
                Marker {
                    id: *id,
                    x: touch.x,
                    y: touch.y,
                    color: touch.color,
                    winner,
                    zooming: winner && zooming,
                }
            })
            .collect();

        Frame {
            state: self.state,
            prompt,
            fill,
            markers,
            winner_color: self.winner.and_then(|id| self.touch(id)).map(|t| t.color),
            winner_mode: self.winner.is_some(),
        }
    }

    pub fn debug_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Version: {}", APP_VERSION),
            format!("State: {}", self.state),
            format!(
                "Winner: {}",
                self.winner
                    .map_or_else(|| "none".to_string(), |id| id.to_string())
            ),
        ];
        if self.touches.is_empty() {
            lines.push("Touches: none".to_string());
            return lines;
        }
        lines.push("Touches:".to_string());
        lines.extend(self.touches.iter().map(|(id, t)| {
            format!("- id {}: {}, {}", id, t.x.round() as i64, t.y.round() as i64)
        }));
        lines
    }

    fn index_of(&self, id: TouchId) -> Option<usize> {
        self.touches.iter().position(|(tid, _)| *tid == id)
    }

    fn on_count_change(&mut self, now: f64) -> Schedule {
        let count = self.touches.len();
        if count == self.last_count {
            return Schedule::Keep;
        }
        self.last_count = count;

        match self.state {
            SessionState::Winner if count == 0 => self.enter_idle(true),
            SessionState::Winner => Schedule::Keep,
            SessionState::Idle if count < self.min_touches => Schedule::Keep,
            SessionState::Countdown if count < self.min_touches => self.enter_idle(false),
            SessionState::Idle | SessionState::Countdown => self.enter_countdown(now),
        }
    }

    fn enter_idle(&mut self, clear_touches: bool) -> Schedule {
        info!("Session {} -> idle", self.state);
        self.state = SessionState::Idle;
        self.countdown = None;
        if clear_touches {
            self.touches.clear();
            self.colors.reset();
            self.last_count = 0;
        }
        self.clear_selection();
        Schedule::Cancel
    }

    /// Starts a fresh countdown, restarting if one is already running.
    fn enter_countdown(&mut self, now: f64) -> Schedule {
        if self.state == SessionState::Countdown {
            info!("Countdown restarted with {} touches", self.touches.len());
        } else {
            info!(
                "Session {} -> countdown with {} touches",
                self.state,
                self.touches.len()
            );
        }
        self.state = SessionState::Countdown;
        self.clear_selection();
        self.generation += 1;
        let ticket = ExpiryTicket {
            generation: self.generation,
            started_at: now,
            due_at: now + COUNTDOWN_MS,
        };
        self.countdown = Some(ticket);
        Schedule::Arm(ticket)
    }

    fn enter_winner(&mut self, id: TouchId, now: f64) -> Schedule {
        self.countdown = None;
        if self.index_of(id).is_none() {
            let clear = self.touches.is_empty();
            return self.enter_idle(clear);
        }
        info!("Session {} -> winner, touch {} chosen", self.state, id);
        self.state = SessionState::Winner;
        self.winner = Some(id);
        self.winner_since = Some(now);
        Schedule::Cancel
    }

    fn clear_selection(&mut self) {
        self.winner = None;
        self.winner_since = None;
    }

    /// Uniform pick over the active touches.
    fn choose_winner(&mut self) -> Option<TouchId> {
        if self.touches.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.touches.len());
        Some(self.touches[index].0)
    }
}
