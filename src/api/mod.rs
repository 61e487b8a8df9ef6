//! HTTP API Wrappers
//!
//! Frontend bindings to the analytics API and the boundary files, organized by page.

mod dashboard;
mod geo;
mod tasks;

use dq_view_model::{ApiError, Envelope};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use dashboard::*;
pub use geo::*;
pub use tasks::*;

/// Readable message out of a thrown JS value
pub(crate) fn js_error(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn network(e: JsValue) -> ApiError {
    ApiError::Network(js_error(&e))
}

/// Fetch `url` and parse the body as JSON; no envelope handling
async fn fetch_json(method: &str, url: &str, body: Option<String>) -> Result<JsValue, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        let headers = Headers::new().map_err(network)?;
        headers.set("Content-Type", "application/json").map_err(network)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let parsed = match response.json() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(e) => Err(e),
    };
    match parsed {
        Ok(json) => Ok(json),
        Err(_) if !response.ok() => Err(ApiError::Http { status: response.status() }),
        Err(e) => Err(ApiError::Decode(js_error(&e))),
    }
}

fn decode_envelope<T: DeserializeOwned>(json: JsValue) -> Result<Envelope<T>, ApiError> {
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let json = fetch_json("GET", url, None).await?;
    decode_envelope::<T>(json)?.into_result()
}

/// Write request whose response payload is not used
async fn send<B: Serialize>(method: &str, url: &str, body: &B) -> Result<(), ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let json = fetch_json(method, url, Some(body)).await?;
    decode_envelope::<IgnoredAny>(json)?.into_ack()
}
