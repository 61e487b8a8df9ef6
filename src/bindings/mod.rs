//! Browser Library Bindings
//!
//! Leaflet and Chart.js are loaded as page globals (`L`, `Chart`).

pub mod chart;
pub mod leaflet;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Serialize into a plain JS object (maps become objects, not `Map`s)
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or_else(|e| {
        log::error!("serialize for JS failed: {}", e);
        JsValue::NULL
    })
}
