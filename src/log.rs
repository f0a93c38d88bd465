use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use wasm_bindgen::JsValue;

static DEBUG: AtomicBool = AtomicBool::new(false);

pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

fn line(message: &str, context: &Value) -> (JsValue, JsValue) {
    let ctx = if context.is_null() || context.as_object().is_some_and(|o| o.is_empty()) {
        String::new()
    } else {
        context.to_string()
    };
    (JsValue::from_str(&format!("[video-downloader] {message}")), JsValue::from_str(&ctx))
}

// The developer console is the only sink; nothing is shipped to the backend.
pub fn info(message: &str, context: Value)  { let (m, c) = line(message, &context); web_sys::console::info_2(&m, &c); }
pub fn warn(message: &str, context: Value)  { let (m, c) = line(message, &context); web_sys::console::warn_2(&m, &c); }
pub fn error(message: &str, context: Value) { let (m, c) = line(message, &context); web_sys::console::error_2(&m, &c); }
pub fn debug(message: &str, context: Value) {
    if DEBUG.load(Ordering::Relaxed) {
        let (m, c) = line(message, &context);
        web_sys::console::debug_2(&m, &c);
    }
}

/// Startup banner, styled with `%c` directives.
pub fn banner(endpoint: &str, local: bool) {
    let hint = if local { "Make sure backend is running: python api.py" } else { "" };
    let build = format!(
        "build {} ({}, rustc {})",
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown"),
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown"),
    );
    let text = format!("\n%c🎥 Video Downloader App\n%cBackend API: {endpoint}\n%c{hint}\n%c{build}\n");
    let styles = js_sys::Array::of5(
        &JsValue::from_str(&text),
        &JsValue::from_str("color: #667eea; font-size: 20px; font-weight: bold;"),
        &JsValue::from_str("color: #764ba2; font-size: 14px;"),
        &JsValue::from_str("color: #10b981; font-size: 12px;"),
        &JsValue::from_str("color: #888; font-size: 11px;"),
    );
    web_sys::console::log(&styles);
}
