use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let api_routes = api::routes(&config);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.environment)?;

    // Merge health endpoints
    let app = router.merge(health_router(config.app));

    info!(
        environment = ?config.environment,
        "Starting {} v{} with graceful shutdown (30s timeout)",
        config.app.name,
        config.app.version
    );

    create_app(app, &config.server, Duration::from_secs(30))
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}
