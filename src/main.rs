// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use prometheus_panels::application::panel_service::PanelService;
use prometheus_panels::infrastructure::config::{load_server_config, load_variables_config};
use prometheus_panels::presentation::app_state::AppState;
use prometheus_panels::presentation::handlers::{health_check, list_variables, transform_panel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let server_config = load_server_config()?;
    let variables = load_variables_config()?;
    tracing::info!("Loaded {} dashboard variables", variables.len());

    // Create services (application layer)
    let panel_service = PanelService::new(variables);

    // Create application state
    let state = Arc::new(AppState { panel_service });

    // Build router (presentation layer)
    // Compression is negotiated in the response builders, not with a layer
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/variables", get(list_variables))
        .route("/api/panels/transform", post(transform_panel))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", server_config.server.bind_addr))?;
    tracing::info!("Starting prometheus-panels service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
