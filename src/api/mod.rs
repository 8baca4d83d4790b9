//! Remote API Bindings
//!
//! Frontend bindings to the task API over the browser's `fetch`.

mod tasks;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use tasks::*;

/// Characters left unescaped in query values and path segments
pub(crate) const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Raw HTTP response: status and body text
struct TextResponse {
    status: u16,
    body: String,
}

impl TextResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET `url` expecting JSON
async fn get_text(url: &str) -> Result<TextResponse, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request.headers().set("Accept", "application/json").map_err(js_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    let status = response.status();
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    Ok(TextResponse { status, body })
}

fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}
