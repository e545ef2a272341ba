// Fetch layer for the tracker backend API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::model::VehiclesResponse;

fn js_err(context: &str, e: JsValue) -> String {
    match e.as_string() {
        Some(msg) => format!("{context}: {msg}"),
        None => context.to_string(),
    }
}

/// GET `/api/vehicles`. The full feed is fetched and filtered client-side so
/// the route buttons stay populated while a filter is active. Errors are
/// flattened to strings for display in the panel's failed state.
pub async fn fetch_vehicles() -> Result<VehiclesResponse, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init("/api/vehicles", &opts)
        .map_err(|e| js_err("bad request", e))?;

    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_err("vehicles fetch failed", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("vehicles API returned HTTP {}", resp.status()));
    }

    let body = JsFuture::from(resp.text().map_err(|e| js_err("no response body", e))?)
        .await
        .map_err(|e| js_err("failed reading body", e))?;
    let body = body.as_string().ok_or("response body was not text")?;

    serde_json::from_str(&body).map_err(|e| format!("bad vehicles payload: {e}"))
}
