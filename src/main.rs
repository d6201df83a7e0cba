// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::bootstrap::DashboardBootstrap;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_source::HttpMetricsSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    default_dashboard, get_dashboard, health_check, list_charts, stream_dashboard,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    // Streaming responses are left uncompressed so each line is flushed as it is produced
    let snapshots = Router::new()
        .route("/dashboards", get(default_dashboard))
        .route("/dashboards/:company_id", get(get_dashboard))
        .layer(CompressionLayer::new());

    Router::new()
        .route("/healthz", get(health_check))
        .route("/charts", get(list_charts))
        .route("/dashboards/:company_id/stream", get(stream_dashboard))
        .merge(snapshots)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create metrics source (infrastructure layer)
    let source = Arc::new(HttpMetricsSource::new(reqwest::Client::new()));

    // Create bootstrap driver (application layer)
    let bootstrap = DashboardBootstrap::new(source, config.api.clone());
    let state = Arc::new(AppState { bootstrap });

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting fin-dashboard on {} (backend {})",
        addr,
        config.api.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, build_router(state)).await?;

    Ok(())
}
