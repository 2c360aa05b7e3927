//! Service entry point for dwparse.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::types::AppState;

mod server;
mod transcript;
mod types;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_addr = env::var("DWPARSE_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let cache_ttl_secs = env::var("DWPARSE_CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECS);

    let app_state = Arc::new(AppState::new(Duration::from_secs(cache_ttl_secs)));
    let router = server::create_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;

    info!("dwparse listening on {bind_addr} (cache TTL: {cache_ttl_secs}s)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
