//! Web shell for the finger picker using Yew.
//! Feeds pointer events, the expiry timer and animation frames into the
//! session and renders the frames it produces.

use finger_picker::{
    config::AppConfig,
    frame::Frame,
    input::PointerKind,
    logging,
    session::{Schedule, Session},
};
use gloo_timers::callback::Timeout;
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod utils;

use components::{
    render_debug_panel, render_markers, render_progress, render_prompts, render_version_badge,
};
use hooks::{use_animation_frame, use_suppressed_window_events};
use utils::now_ms;

// ──────────────────────────────────────────────────────────────────────────────
// Type aliases for better readability
type SharedSession = Rc<RefCell<Session<StdRng>>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

const SUPPRESSED_EVENTS: &[&str] = &["contextmenu", "dragstart"];

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Apply a session [`Schedule`] to the single pending expiry timer.
/// Dropping a `Timeout` cancels it.
fn apply_schedule(
    schedule: Schedule,
    now: f64,
    session: &SharedSession,
    timer: &TimerSlot,
    frame: &UseStateHandle<Frame>,
) {
    match schedule {
        Schedule::Keep => {}
        Schedule::Cancel => {
            timer.borrow_mut().take();
        }
        Schedule::Arm(ticket) => {
            let session_cb = session.clone();
            let timer_cb = timer.clone();
            let frame_cb = frame.clone();
            let handle = Timeout::new(ticket.delay_ms(now), move || {
                // Already fired; only release the slot.
                let fired = timer_cb.borrow_mut().take();
                if let Some(fired) = fired {
                    let _ = fired.forget();
                }
                let next = session_cb.borrow_mut().expire(ticket);
                apply_schedule(next, ticket.due_at, &session_cb, &timer_cb, &frame_cb);
                frame_cb.set(session_cb.borrow().frame(now_ms()));
            });
            *timer.borrow_mut() = Some(handle);
        }
    }
}

fn pointer_position(e: &PointerEvent) -> (f64, f64) {
    (e.client_x() as f64, e.client_y() as f64)
}

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Properties, PartialEq, Clone)]
pub struct PickerProps {
    pub config: AppConfig,
}

/// Full-screen touch surface owning the session.
#[function_component(Picker)]
fn picker(props: &PickerProps) -> Html {
    let config = props.config;
    let session = use_mut_ref(|| Session::new(&config, StdRng::from_os_rng()));
    let timer = use_mut_ref(|| None::<Timeout>);
    let frame = use_state_eq(|| session.borrow().frame(now_ms()));

    {
        let session = session.clone();
        let frame = frame.clone();
        use_animation_frame(move |now| frame.set(session.borrow().frame(now)));
    }

    let on_pointer_down = {
        let session = session.clone();
        let timer = timer.clone();
        let frame = frame.clone();
        Callback::from(move |e: PointerEvent| {
            if !PointerKind::from_dom(&e.pointer_type()).is_accepted() {
                return;
            }
            e.prevent_default();
            let now = now_ms();
            let (x, y) = pointer_position(&e);
            let schedule = session.borrow_mut().touch_begin(e.pointer_id(), x, y, now);
            apply_schedule(schedule, now, &session, &timer, &frame);
            frame.set(session.borrow().frame(now));
        })
    };

    let on_pointer_move = {
        let session = session.clone();
        let frame = frame.clone();
        Callback::from(move |e: PointerEvent| {
            let (x, y) = pointer_position(&e);
            let tracked = session.borrow_mut().touch_move(e.pointer_id(), x, y);
            if tracked {
                e.prevent_default();
                frame.set(session.borrow().frame(now_ms()));
            }
        })
    };

    // Shared by pointerup and pointercancel.
    let on_pointer_up = {
        let session = session.clone();
        let timer = timer.clone();
        let frame = frame.clone();
        Callback::from(move |e: PointerEvent| {
            let now = now_ms();
            let ended = session.borrow_mut().touch_end(e.pointer_id(), now);
            let Some(schedule) = ended else {
                return;
            };
            e.prevent_default();
            apply_schedule(schedule, now, &session, &timer, &frame);
            frame.set(session.borrow().frame(now));
        })
    };

    let debug_lines = if config.debug {
        session.borrow().debug_lines()
    } else {
        Vec::new()
    };
    let root_class = classes!("picker", frame.winner_mode.then_some("winner-mode"));
    let root_style = frame
        .winner_color
        .map(|color| format!("--winner-color: {}", color))
        .unwrap_or_default();

    html! {
        <div
            class={root_class}
            style={root_style}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up.clone()}
            onpointercancel={on_pointer_up}
        >
            <div id="touchLayer" class="touch-layer">
                { render_markers(&frame.markers) }
            </div>
            { render_progress(&frame.fill) }
            { render_prompts(&frame.prompt) }
            { render_version_badge() }
            { render_debug_panel(&debug_lines, config.debug) }
        </div>
    }
}

/// App wrapper installing window-level event suppression.
#[function_component]
pub fn App(props: &PickerProps) -> Html {
    use_suppressed_window_events(SUPPRESSED_EVENTS);
    html! { <Picker config={props.config} /> }
}

/// Entry point: reads the configuration once and mounts the app.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();

    let config = utils::read_config();
    let level = if config.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = logging::init(level) {
        warn!("Console logger not installed: {}", e);
    }
    info!(
        "Starting finger picker (lang={}, solo={}, min touches={})",
        config.language.code(),
        config.solo,
        config.min_touch_count()
    );

    utils::apply_document_language(&config);
    utils::register_service_worker();
    yew::Renderer::<App>::with_props(PickerProps { config }).render();
}
