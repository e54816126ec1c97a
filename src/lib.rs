//! Finger picker: players hold a finger on the screen and, after a short
//! countdown, one of the touches is picked at random.
//!
//! [`session::Session`] is the whole game. The Yew shell in `main.rs` and the
//! [`FingerPicker`] binding below only feed it pointer events and clock
//! readings and render the [`frame::Frame`] it produces.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod colors;
pub mod config;
pub mod frame;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod session;

pub use config::AppConfig;
pub use frame::Frame;
pub use session::{ExpiryTicket, Schedule, Session, SessionState, TouchId};

use input::PointerKind;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Session wrapper for hosts that drive the game from plain JavaScript.
///
/// Input methods return the serialized [`Schedule`]; the host owns the
/// timeout and passes the armed ticket back to [`FingerPicker::expire`].
#[wasm_bindgen]
pub struct FingerPicker {
    config: AppConfig,
    session: Session<StdRng>,
}

#[wasm_bindgen]
impl FingerPicker {
    /// `query` is `location.search`, `device_locale` is `navigator.language`.
    #[wasm_bindgen(constructor)]
    pub fn new(query: &str, device_locale: Option<String>) -> FingerPicker {
        let config = AppConfig::from_query(query, device_locale.as_deref());
        FingerPicker {
            config,
            session: Session::new(&config, StdRng::from_os_rng()),
        }
    }

    /// Deterministic variant for replaying games.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(query: &str, device_locale: Option<String>, seed: u64) -> FingerPicker {
        let config = AppConfig::from_query(query, device_locale.as_deref());
        FingerPicker {
            config,
            session: Session::new(&config, StdRng::seed_from_u64(seed)),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.config.language.code().to_string()
    }

    #[wasm_bindgen(getter, js_name = debugEnabled)]
    pub fn debug_enabled(&self) -> bool {
        self.config.debug
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, id: i32, pointer_type: &str, x: f64, y: f64, now: f64) -> JsValue {
        if !PointerKind::from_dom(pointer_type).is_accepted() {
            return to_js(&Schedule::Keep);
        }
        to_js(&self.session.touch_begin(id, x, y, now))
    }

    /// Returns whether the pointer is tracked.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, id: i32, x: f64, y: f64) -> bool {
        self.session.touch_move(id, x, y)
    }

    /// Returns `null` for an untracked pointer.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, id: i32, now: f64) -> JsValue {
        match self.session.touch_end(id, now) {
            Some(schedule) => to_js(&schedule),
            None => JsValue::NULL,
        }
    }

    pub fn expire(&mut self, ticket: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<ExpiryTicket>(ticket) {
            Ok(ticket) => to_js(&self.session.expire(ticket)),
            Err(e) => {
                log::debug!("Discarding malformed expiry ticket: {}", e);
                to_js(&Schedule::Keep)
            }
        }
    }

    pub fn frame(&self, now: f64) -> JsValue {
        to_js(&self.session.frame(now))
    }

    #[wasm_bindgen(js_name = debugText)]
    pub fn debug_text(&self) -> String {
        self.session.debug_lines().join("\n")
    }
}
