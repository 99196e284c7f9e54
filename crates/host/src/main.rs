use std::sync::Arc;

use anyhow::Context;
use kinetics_web_host::api::{self, AppState};
use kinetics_web_host::config::Config;
use kinetics_web_host::forward::Upstream;
use tokio::signal;
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    // Wait for Ctrl+C or SIGTERM
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let config = Config::load();

    let upstream = Upstream::new(&config.upstream).context("building upstream client")?;
    match upstream.data_url() {
        Some(url) => tracing::info!("Relaying /data to {url}"),
        None => tracing::warn!("No upstream configured; /data will answer 503 (set KINETICS_UPSTREAM)"),
    }
    if !config.assets.dir.join("index.html").exists() {
        tracing::warn!("No index.html under {}", config.assets.dir.display());
    }

    let state = AppState {
        upstream: Arc::new(upstream),
    };
    let app = api::router(state, &config.assets.dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Serving on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
