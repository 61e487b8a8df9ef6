//! Leaflet Bindings
//!
//! Only the slice of the Leaflet API the region map uses.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(container: &web_sys::HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = flyToBounds)]
    pub fn fly_to_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &GeoJsonLayer);

    /// `L.GeoJSON` feature group; events of child shapes bubble up to it
    #[wasm_bindgen(js_namespace = L, js_name = GeoJSON)]
    pub type GeoJsonLayer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON, catch)]
    pub fn geo_json(data: &JsValue, options: &JsValue) -> Result<GeoJsonLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &GeoJsonLayer, map: &LeafletMap) -> GeoJsonLayer;

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &GeoJsonLayer, style: &JsValue);

    #[wasm_bindgen(method, js_name = resetStyle)]
    pub fn reset_style(this: &GeoJsonLayer, layer: &PathLayer);

    #[wasm_bindgen(method, js_name = getLayers)]
    pub fn get_layers(this: &GeoJsonLayer) -> js_sys::Array;

    #[wasm_bindgen(method)]
    pub fn on(this: &GeoJsonLayer, event: &str, handler: &JsValue);

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &GeoJsonLayer, content: &JsValue, options: &JsValue);

    /// One rendered boundary shape
    #[wasm_bindgen(js_namespace = L, js_name = Path)]
    pub type PathLayer;

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &PathLayer, style: &JsValue);

    #[wasm_bindgen(method, js_name = bringToFront)]
    pub fn bring_to_front(this: &PathLayer);

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &PathLayer) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn feature(this: &PathLayer) -> JsValue;
}

/// Child shapes of `group`
pub fn paths(group: &GeoJsonLayer) -> impl Iterator<Item = PathLayer> {
    group.get_layers().into_iter().map(JsCast::unchecked_into)
}

/// Child shape an event bubbled up from (`e.layer`)
pub fn event_layer(event: &JsValue) -> Option<PathLayer> {
    js_sys::Reflect::get(event, &JsValue::from_str("layer"))
        .ok()
        .filter(|l| l.is_object())
        .map(JsCast::unchecked_into)
}

/// `[lat, lng]` as a Leaflet latlng array
pub fn lat_lng(center: [f64; 2]) -> JsValue {
    js_sys::Array::of2(&center[0].into(), &center[1].into()).into()
}
