//! Chart.js Bindings

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js chart bound to a canvas
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}
