//! Rendering instructions produced by the session on every tick.

use crate::colors::Color;
use crate::session::{SessionState, TouchId};
use serde::Serialize;

/// Fill fraction of the four edge progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeFill {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeFill {
    /// All four edges mirror the same countdown.
    pub fn uniform(value: f64) -> Self {
        let value = value.clamp(0.0, 1.0);
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: TouchId,
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub winner: bool,
    /// Set for a short while after the winner is picked.
    pub zooming: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub state: SessionState,
    pub prompt: String,
    pub fill: EdgeFill,
    pub markers: Vec<Marker>,
    pub winner_color: Option<Color>,
    pub winner_mode: bool,
}

impl Frame {
    pub fn winner(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fill_is_clamped() {
        assert_eq!(EdgeFill::uniform(1.7), EdgeFill::uniform(1.0));
        assert_eq!(EdgeFill::uniform(-0.2).left, 0.0);
        let half = EdgeFill::uniform(0.5);
        assert_eq!((half.top, half.right, half.bottom), (0.5, 0.5, 0.5));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let frame = Frame {
            state: SessionState::Winner,
            prompt: "Chosen. Lift to play again.".into(),
            fill: EdgeFill::default(),
            markers: vec![Marker {
                id: 7,
                x: 10.0,
                y: 20.0,
                color: "#00f2a5",
                winner: true,
                zooming: false,
            }],
            winner_color: Some("#00f2a5"),
            winner_mode: true,
        };
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["state"], "winner");
        assert_eq!(json["winnerColor"], "#00f2a5");
        assert_eq!(json["winnerMode"], true);
        assert_eq!(json["markers"][0]["id"], 7);
        assert_eq!(frame.winner().map(|m| m.id), Some(7));
    }
}
