//! Boundary Geometry
//!
//! GeoJSON stays a JS value; only feature properties cross into Rust.

use dq_view_model::geo::{districts_of, FeatureProperties};
use dq_view_model::ApiError;
use wasm_bindgen::{JsCast, JsValue};

use super::fetch_json;

/// Raw feature collection, handed to the map library untouched
pub async fn fetch_geojson(url: &str) -> Result<JsValue, ApiError> {
    fetch_json("GET", url, None).await
}

/// Naming properties of one feature; empty when absent or malformed
pub fn feature_properties(feature: &JsValue) -> FeatureProperties {
    js_sys::Reflect::get(feature, &JsValue::from_str("properties"))
        .ok()
        .filter(|p| p.is_object())
        .and_then(|p| serde_wasm_bindgen::from_value(p).ok())
        .unwrap_or_default()
}

/// District features indexed by their naming properties, kept for the session
pub struct DistrictCatalog {
    features: Vec<(FeatureProperties, JsValue)>,
}

impl DistrictCatalog {
    pub fn from_collection(collection: &JsValue) -> Result<Self, ApiError> {
        let features = js_sys::Reflect::get(collection, &JsValue::from_str("features"))
            .map_err(|e| ApiError::Decode(super::js_error(&e)))?;
        let features: js_sys::Array = features
            .dyn_into()
            .map_err(|_| ApiError::Decode("district file has no features array".into()))?;
        let features = features
            .iter()
            .map(|feature| (feature_properties(&feature), feature))
            .collect();
        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// FeatureCollection of the districts inside `region`, plus how many there are
    pub fn collection_for(&self, region: &str) -> (JsValue, usize) {
        let features: js_sys::Array = districts_of(&self.features, region).into_iter().collect();
        let count = features.length() as usize;
        let collection = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&collection, &"type".into(), &"FeatureCollection".into());
        let _ = js_sys::Reflect::set(&collection, &"features".into(), &features);
        (collection.into(), count)
    }
}
