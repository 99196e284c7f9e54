mod dom;
mod handler;
mod network;
mod plotly;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::Controls;
use crate::handler::{update_plot, PlotView};

fn listen_input(slider: &HtmlInputElement, view: &Rc<PlotView>) -> Result<(), JsValue> {
    let view = Rc::clone(view);
    let on_input = Closure::wrap(Box::new(move || {
        update_plot(&view);
    }) as Box<dyn FnMut()>);
    slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    on_input.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let controls = Controls::find()?;
    let view = PlotView::new(controls);

    web_sys::console::log_1(&format!("[Main] Plot endpoint: {}", view.endpoint()).into());

    listen_input(&view.controls.k1, &view)?;
    listen_input(&view.controls.k2, &view)?;

    // Initial plot
    update_plot(&view);

    Ok(())
}
