use finger_picker::config::{AppConfig, SERVICE_WORKER_PATH};
use log::{debug, info};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Milliseconds on the same monotonic clock as animation frame timestamps.
pub fn now_ms() -> f64 {
    gloo_utils::window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Read the startup configuration from the page URL and browser locale.
pub fn read_config() -> AppConfig {
    let window = gloo_utils::window();
    let search = window.location().search().unwrap_or_default();
    let locale = window.navigator().language();
    AppConfig::from_query(&search, locale.as_deref())
}

pub fn apply_document_language(config: &AppConfig) {
    if let Some(root) = gloo_utils::document().document_element() {
        let _ = root.set_attribute("lang", config.language.code());
    }
}

/// Best effort: failures are only logged.
pub fn register_service_worker() {
    let navigator = gloo_utils::window().navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        debug!("Service workers unavailable");
        return;
    }
    let registration = navigator.service_worker().register(SERVICE_WORKER_PATH);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(_) => info!("Service worker registered from {}", SERVICE_WORKER_PATH),
            Err(e) => debug!("Service worker registration failed: {:?}", e),
        }
    });
}
