//! HTTP routes for kinetics-web
//!
//! `/data` is relayed upstream, `/health` reports liveness, and everything
//! else is served from the asset directory.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use kinetics_web_protocol::DATA_ENDPOINT;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::forward::Upstream;

// Shared state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
}

pub fn router(state: AppState, assets: &Path) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(DATA_ENDPOINT, post(forward_data))
        .fallback_service(ServeDir::new(assets))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn forward_data(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    state.upstream.forward(body).await.map_err(|e| {
        tracing::error!("Forwarding {DATA_ENDPOINT} failed: {e}");
        e
    })
}
