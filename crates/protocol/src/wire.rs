//! JSON exchange with the `/data` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PlotError;

/// Default endpoint the UI posts slider values to
pub const DATA_ENDPOINT: &str = "/data";

/// Text shown in place of the chart when an update fails
pub const PLOT_ERROR_TEXT: &str = "Error loading plot. See console for details.";

/// Request body: the two rate constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConstants {
    pub k1: f64,
    pub k2: f64,
}

impl RateConstants {
    pub const fn new(k1: f64, k2: f64) -> Self {
        Self { k1, k2 }
    }

    pub fn to_json(&self) -> Result<String, PlotError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response body: chart series and layout, passed through to the renderer untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFigure {
    pub data: Value,
    pub layout: Value,
}

impl PlotFigure {
    /// Decode a response body. Anything but an object carrying both
    /// `data` and `layout` is rejected; other keys are ignored.
    pub fn from_json(body: &str) -> Result<Self, PlotError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, PlotError> {
        if !value.is_object() {
            return Err(PlotError::Decode("expected a JSON object".to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Plotly config passed on every render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: Vec<String>,
    pub displaylogo: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            display_mode_bar: true,
            mode_bar_buttons_to_remove: ["select2d", "lasso2d", "autoScale2d"]
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            displaylogo: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = RateConstants::new(0.1, 0.05).to_json().unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, json!({ "k1": 0.1, "k2": 0.05 }));
    }

    #[test]
    fn test_figure_passes_data_and_layout_through() {
        let body = json!({
            "data": [{ "x": [0, 1], "y": [100, 90], "name": "A (Reactant)" }],
            "layout": { "height": 520, "hovermode": "x unified" },
        });
        let figure = PlotFigure::from_json(&body.to_string()).unwrap();
        assert_eq!(figure.data, body["data"]);
        assert_eq!(figure.layout, body["layout"]);
    }

    #[test]
    fn test_figure_ignores_extra_keys() {
        let figure =
            PlotFigure::from_json(r#"{"data": [], "layout": {}, "frames": []}"#).unwrap();
        assert_eq!(figure.data, json!([]));
    }

    #[test]
    fn test_figure_missing_layout() {
        let err = PlotFigure::from_json(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, PlotError::Decode(_)));
    }

    #[test]
    fn test_figure_rejects_non_object() {
        assert!(matches!(
            PlotFigure::from_json("[1, 2]"),
            Err(PlotError::Decode(_))
        ));
        assert!(matches!(
            PlotFigure::from_json("<html>"),
            Err(PlotError::Decode(_))
        ));
    }

    #[test]
    fn test_plot_config_wire_names() {
        let value = serde_json::to_value(PlotConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "responsive": true,
                "displayModeBar": true,
                "modeBarButtonsToRemove": ["select2d", "lasso2d", "autoScale2d"],
                "displaylogo": false,
            })
        );
    }
}
