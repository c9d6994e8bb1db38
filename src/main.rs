// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_controller::DashboardController;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_dataset_source::HttpDatasetSource;
use crate::infrastructure::view_state::ViewState;
use crate::presentation::app_state::AppState;
use crate::presentation::router::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_dashboard_config()?;

    // Load the dataset once; on failure the dashboard stays empty
    let source = HttpDatasetSource::new(config.dataset.url);
    let mut dashboard = DashboardController::new(ViewState::default());
    if let Err(e) = dashboard.load(&source).await {
        if dashboard.is_loaded() {
            tracing::warn!("Dashboard loaded but the first subject did not fully render: {:?}", e);
        } else {
            tracing::error!("Dashboard not loaded, serving an empty dashboard: {}", e);
        }
    }

    let state = Arc::new(AppState::new(dashboard));

    let addr: SocketAddr = config.server.bind_address.parse()?;
    tracing::info!("Starting biodiversity dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
