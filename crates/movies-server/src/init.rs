//! Server initialization
//!
//! Loads configuration, installs logging, assembles the application and
//! launches Rocket on the configured address. Rocket owns shutdown
//! (Ctrl-C); backend clients are dropped with the application context.

use std::path::Path;

use movies_infrastructure::config::{AppConfig, ConfigLoader};
use movies_infrastructure::init_app;
use movies_infrastructure::logging::init_logging;
use tracing::info;

use crate::routes::catalog_rocket;

/// Run the catalog server until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        search = %config.search.provider,
        cache = %config.cache.provider,
        "Starting movies catalog server"
    );

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    let context = init_app(config).await?;

    catalog_rocket(context).configure(figment).launch().await?;

    info!("Server stopped");
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
