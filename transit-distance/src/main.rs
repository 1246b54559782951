use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_distance::catalog::StationCatalog;
use transit_distance::config::ServerConfig;
use transit_distance::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast on a missing or inconsistent dataset
    let catalog = match StationCatalog::load(&config.stations_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(path = %config.stations_path.display(), error = %e, "failed to load stations");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stations = catalog.len(),
        lines = catalog.line_count(),
        "loaded station catalog"
    );

    let state = AppState::new(catalog, config.distance.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.bind_addr, "transit distance server listening");
    info!("  GET /health");
    info!("  GET /stations?q=&limit=");
    info!("  GET /stations/:id");
    info!("  GET /lines");
    info!("  GET /lines/:id");
    info!("  GET /transit/distance?inspectorStationId=&userStationId=|userLat=&userLon=");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
