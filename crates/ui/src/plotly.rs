//! Binding to the page's global `Plotly` object.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

use kinetics_web_protocol::{PlotConfig, PlotError, PlotFigure};

use crate::network::js_error_message;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
    fn plotly_react(
        div: &HtmlElement,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

fn to_js(value: &impl serde::Serialize) -> Result<JsValue, PlotError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| PlotError::Decode(js_error_message(&e)))
}

/// Re-render `div` with exactly the series and layout received
pub async fn react(div: &HtmlElement, figure: &PlotFigure, config: &PlotConfig) -> Result<(), PlotError> {
    let data = to_js(&figure.data)?;
    let layout = to_js(&figure.layout)?;
    let config = to_js(config)?;

    let render = |e: JsValue| PlotError::Render(js_error_message(&e));
    let promise = plotly_react(div, &data, &layout, &config).map_err(render)?;
    JsFuture::from(promise).await.map_err(render)?;
    Ok(())
}
