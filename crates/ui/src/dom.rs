use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement};

use kinetics_web_protocol::{Labels, RateConstants, DATA_ENDPOINT, PLOT_ERROR_TEXT};

/// Get document helper
fn get_document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

fn element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
}

/// Endpoint named by the plot element's `data-endpoint`, or `/data`
pub fn resolve_endpoint(attr: Option<String>) -> String {
    attr.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DATA_ENDPOINT.to_string())
}

/// Page elements the handler reads from and writes to
#[derive(Clone)]
pub struct Controls {
    pub k1: HtmlInputElement,
    pub k2: HtmlInputElement,
    k1_value: Element,
    k2_value: Element,
    metric_k1: Element,
    metric_k2: Element,
    metric_ratio: Element,
    pub plot: HtmlElement,
}

impl Controls {
    /// Look up every control by id; a missing element is a startup error
    pub fn find() -> Result<Self, JsValue> {
        let doc = get_document()?;
        Ok(Self {
            k1: element(&doc, "k1")?.dyn_into()?,
            k2: element(&doc, "k2")?.dyn_into()?,
            k1_value: element(&doc, "k1-value")?,
            k2_value: element(&doc, "k2-value")?,
            metric_k1: element(&doc, "metric-k1")?,
            metric_k2: element(&doc, "metric-k2")?,
            metric_ratio: element(&doc, "metric-ratio")?,
            plot: element(&doc, "plot")?.dyn_into()?,
        })
    }

    /// Current slider positions (NaN if a slider holds no number)
    pub fn read_rates(&self) -> RateConstants {
        RateConstants::new(self.k1.value_as_number(), self.k2.value_as_number())
    }

    pub fn show_labels(&self, labels: &Labels) {
        self.k1_value.set_text_content(Some(&labels.k1_value));
        self.k2_value.set_text_content(Some(&labels.k2_value));
        self.metric_k1.set_text_content(Some(&labels.metric_k1));
        self.metric_k2.set_text_content(Some(&labels.metric_k2));
        self.metric_ratio.set_text_content(Some(&labels.ratio));
    }

    /// Replace the chart with the fixed error message
    pub fn show_plot_error(&self) {
        self.plot.set_inner_text(PLOT_ERROR_TEXT);
    }

    pub fn endpoint(&self) -> String {
        resolve_endpoint(self.plot.get_attribute("data-endpoint"))
    }
}
