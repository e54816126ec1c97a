use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Call `on_frame` with the frame timestamp on every animation frame while
/// the component is mounted.
#[hook]
pub fn use_animation_frame<F>(on_frame: F)
where
    F: Fn(f64) + 'static,
{
    use_effect_with((), move |_| {
        let window = gloo_utils::window();
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
            Rc::new(RefCell::new(None));

        {
            let window = window.clone();
            let frame_id = frame_id.clone();
            let closure_cell_loop = closure_cell.clone();
            *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                on_frame(timestamp);
                if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                    frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut(f64)>));
        }
        if let Some(cb) = closure_cell.borrow().as_ref() {
            frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }

        move || {
            if let Some(id) = frame_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
            // Breaks the closure's reference to itself.
            closure_cell.borrow_mut().take();
        }
    });
}

/// Swallow the given window events (context menu, drag) while mounted.
#[hook]
pub fn use_suppressed_window_events(events: &'static [&'static str]) {
    use_effect_with((), move |_| {
        let window = gloo_utils::window();
        let suppress = Closure::wrap(Box::new(|e: web_sys::Event| e.prevent_default())
            as Box<dyn FnMut(web_sys::Event)>);
        for name in events {
            let _ = window.add_event_listener_with_callback(name, suppress.as_ref().unchecked_ref());
        }

        move || {
            for name in events {
                let _ = window
                    .remove_event_listener_with_callback(name, suppress.as_ref().unchecked_ref());
            }
        }
    });
}
