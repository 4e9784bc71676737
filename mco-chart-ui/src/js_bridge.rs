//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js and Plotly are loaded by the host page as globals. The small
//! helper script in `assets/js/co-views.js` wraps them and is exposed via
//! `window.*`. This module serializes figures and calls those helpers.

use wasm_bindgen::{JsCast, JsValue};

// Embed the helper JS at compile time
static CO_VIEWS_JS: &str = include_str!("../assets/js/co-views.js");

/// Evaluate JS, returning the thrown error's message on failure.
pub fn call_js(code: &str) -> Result<JsValue, String> {
    js_sys::eval(code).map_err(|e| describe_js_error(&e))
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// A Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

/// Evaluate the helper script. Call once at app startup.
pub fn init_views() {
    match call_js(CO_VIEWS_JS) {
        Ok(_) => log::info!("CO view helpers initialized"),
        Err(e) => log::error!("Failed to initialize CO view helpers: {}", e),
    }
}

/// Create a Chart.js line chart on the canvas `canvas_id`.
///
/// `config` is a Chart.js configuration object; the helper adds the
/// scientific-notation tick callback.
pub fn draw_chart(canvas_id: &str, config: &serde_json::Value) -> Result<(), String> {
    call_js(&format!("window.mcoDrawChart({}, {});", js_string(canvas_id), config)).map(|_| ())
}

/// Destroy the Chart.js instance on `canvas_id`.
pub fn destroy_chart(canvas_id: &str) {
    if let Err(e) = call_js(&format!("window.mcoDestroyChart({});", js_string(canvas_id))) {
        log::warn!("Failed to destroy chart #{}: {}", canvas_id, e);
    }
}

/// Plot a Plotly figure (`{data, layout}`) into the div `div_id`.
pub fn draw_globe(div_id: &str, figure: &serde_json::Value) -> Result<(), String> {
    call_js(&format!("window.mcoDrawGlobe({}, {});", js_string(div_id), figure)).map(|_| ())
}

/// Purge every Plotly trace from `div_id`.
pub fn purge_globe(div_id: &str) {
    if let Err(e) = call_js(&format!("window.mcoPurgeGlobe({});", js_string(div_id))) {
        log::warn!("Failed to purge globe #{}: {}", div_id, e);
    }
}
