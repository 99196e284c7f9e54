use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use kinetics_web_protocol::{Labels, Outcome, PlotConfig, PlotError, RequestSequencer};

use crate::dom::Controls;
use crate::network::fetch_figure;
use crate::plotly;

/// State shared by the slider listeners
pub struct PlotView {
    pub controls: Controls,
    endpoint: String,
    config: PlotConfig,
    sequencer: RequestSequencer,
}

impl PlotView {
    pub fn new(controls: Controls) -> Rc<Self> {
        let endpoint = controls.endpoint();
        Rc::new(Self {
            controls,
            endpoint,
            config: PlotConfig::default(),
            sequencer: RequestSequencer::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Refresh labels from the sliders, then request and render a new chart.
///
/// Only the latest request may touch the chart; older responses are dropped.
pub fn update_plot(view: &Rc<PlotView>) {
    let rates = view.controls.read_rates();
    view.controls.show_labels(&Labels::from_rates(&rates));

    let ticket = view.sequencer.issue();
    let view = Rc::clone(view);

    spawn_local(async move {
        let result = fetch_figure(&view.endpoint, &rates).await;
        let settle = view.sequencer.settle(ticket);

        match Outcome::decide(settle, result) {
            Outcome::Drop => {
                web_sys::console::debug_1(
                    &format!(
                        "[Plot] Dropping stale response #{} ({} still in flight)",
                        ticket.id(),
                        view.sequencer.in_flight()
                    )
                    .into(),
                );
            }
            Outcome::Render(figure) => {
                let rendered = plotly::react(&view.controls.plot, &figure, &view.config).await;
                // A newer request may have settled while Plotly was drawing
                if let Err(err) = rendered {
                    if view.sequencer.is_current(ticket) {
                        report_error(&view, &err);
                    }
                }
            }
            Outcome::ShowError(err) => report_error(&view, &err),
        }
    });
}

fn report_error(view: &PlotView, err: &PlotError) {
    web_sys::console::error_2(&"Failed to update plot:".into(), &err.to_string().into());
    view.controls.show_plot_error();
}
