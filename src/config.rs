//! Runtime Configuration
//!
//! Reads `window.__DQ_CONFIG__` when the hosting page defines it.

use dq_view_model::AppConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__DQ_CONFIG__";

pub fn load() -> AppConfig {
    let Some(window) = web_sys::window() else {
        return AppConfig::default();
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return AppConfig::default();
    }
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => config,
        Err(e) => {
            // Logger is not installed yet
            web_sys::console::warn_1(&format!("[CONFIG] invalid {}: {}, using defaults", CONFIG_GLOBAL, e).into());
            AppConfig::default()
        }
    }
}
