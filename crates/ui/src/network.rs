use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Headers, Request, RequestInit, Response};

use kinetics_web_protocol::{PlotError, PlotFigure, RateConstants};

/// Readable message for a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn network(err: JsValue) -> PlotError {
    PlotError::Network(js_error_message(&err))
}

fn build_request(endpoint: &str, rates: &RateConstants) -> Result<Request, PlotError> {
    let body = rates.to_json()?;

    let headers = Headers::new().map_err(network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    Request::new_with_str_and_init(endpoint, &opts).map_err(network)
}

/// POST the rate constants and decode the figure from the response.
/// Any non-ok status is an error; the body is not inspected in that case.
pub async fn fetch_figure(endpoint: &str, rates: &RateConstants) -> Result<PlotFigure, PlotError> {
    let win = window().ok_or_else(|| PlotError::Network("no window".to_string()))?;
    let req = build_request(endpoint, rates)?;

    let resp_val = JsFuture::from(win.fetch_with_request(&req))
        .await
        .map_err(network)?;
    let resp: Response = resp_val.dyn_into().map_err(network)?;

    if let Some(err) = PlotError::from_status(resp.status()) {
        return Err(err);
    }

    let text = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?;
    let text = text
        .as_string()
        .ok_or_else(|| PlotError::Decode("response body is not text".to_string()))?;

    PlotFigure::from_json(&text)
}
