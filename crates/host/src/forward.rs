//! Relays `/data` requests to the external computation service.
//!
//! The host never looks inside the figure; status and body come back as-is.

use std::time::Duration;

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use kinetics_web_protocol::DATA_ENDPOINT;
use thiserror::Error;

use crate::config::UpstreamConfig;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("no upstream configured for /data")]
    NotConfigured,
    #[error("building HTTP client: {0}")]
    Client(String),
    #[error("upstream unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
}

impl ForwardError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Upstream response, relayed unchanged
#[derive(Debug)]
pub struct Relayed {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        (self.status, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
    }
}

/// HTTP client bound to one upstream base URL
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    data_url: Option<String>,
}

impl Upstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForwardError::Client(e.to_string()))?;
        Ok(Self {
            client,
            data_url: config.url.as_deref().map(data_url),
        })
    }

    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    /// POST `body` to the upstream `/data`
    pub async fn forward(&self, body: Bytes) -> Result<Relayed, ForwardError> {
        let url = self.data_url.as_deref().ok_or(ForwardError::NotConfigured)?;

        let resp = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
        let body = resp.bytes().await?;

        if !status.is_success() {
            tracing::warn!("Upstream answered {status} for {url}");
        }

        Ok(Relayed {
            status,
            content_type,
            body,
        })
    }
}

/// `http://host:5000/` -> `http://host:5000/data`
fn data_url(base: &str) -> String {
    format!("{}{DATA_ENDPOINT}", base.trim_end_matches('/'))
}
