//! Pure Yew view helpers for the picker screen.
//!
//! Everything here renders from a [`Frame`] snapshot; no state lives here.

use finger_picker::config::APP_VERSION;
use finger_picker::frame::{EdgeFill, Marker};
use yew::prelude::*;

const PROMPT_EDGES: [(&str, &str); 4] = [
    ("promptTop", "prompt prompt--top"),
    ("promptRight", "prompt prompt--right"),
    ("promptBottom", "prompt prompt--bottom"),
    ("promptLeft", "prompt prompt--left"),
];

/// CSS custom properties positioning a touch dot.
pub fn marker_style(marker: &Marker) -> String {
    format!(
        "--touch-color: {}; --touch-x: {}px; --touch-y: {}px;",
        marker.color, marker.x, marker.y
    )
}

pub fn scale_x(value: f64) -> String {
    format!("transform: scaleX({})", value)
}

pub fn scale_y(value: f64) -> String {
    format!("transform: scaleY({})", value)
}

/// Same prompt on all four edges so every player can read it.
pub fn render_prompts(text: &str) -> Html {
    PROMPT_EDGES
        .iter()
        .map(|(id, class)| {
            html! { <div id={*id} class={*class}>{ text }</div> }
        })
        .collect::<Html>()
}

pub fn render_progress(fill: &EdgeFill) -> Html {
    html! {
        <>
            <div id="progressTop" class="progress progress--top" style={scale_x(fill.top)}></div>
            <div id="progressRight" class="progress progress--right" style={scale_y(fill.right)}></div>
            <div id="progressBottom" class="progress progress--bottom" style={scale_x(fill.bottom)}></div>
            <div id="progressLeft" class="progress progress--left" style={scale_y(fill.left)}></div>
        </>
    }
}

pub fn render_markers(markers: &[Marker]) -> Html {
    markers
        .iter()
        .map(|marker| {
            let class = classes!(
                "touch-dot",
                marker.winner.then_some("touch-dot--winner"),
                marker.zooming.then_some("is-zooming")
            );
            html! { <div key={marker.id.to_string()} class={class} style={marker_style(marker)}></div> }
        })
        .collect::<Html>()
}

pub fn render_version_badge() -> Html {
    html! { <div class="version-badge">{ APP_VERSION }</div> }
}

/// Hidden unless the debug flag is set.
pub fn render_debug_panel(lines: &[String], visible: bool) -> Html {
    let style = if visible { "display: block" } else { "display: none" };
    html! {
        <div class="debug-panel" aria-hidden="true" style={style}>
            { lines.join("\n") }
        </div>
    }
}
