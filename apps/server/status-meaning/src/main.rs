use status_meaning::create_router_from_config;
use status_meaning::error::ServerError;
use status_meaning::logger::{DEFAULT_LOG_LEVEL, initialize as LoggerInitialize};

use models::ErrorLocation;
use status_core::config::{AppConfig, default_config_dir};

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config_dir = default_config_dir()?;
    let config = AppConfig::load_with_env(&config_dir)?;

    // Initialize logger FIRST
    LoggerInitialize(
        config.log_level(DEFAULT_LOG_LEVEL)?,
        config.logging.directory.as_deref(),
    )?;

    info!("Status meaning server starting");
    info!("Config directory: {}", config_dir.display());

    let app = create_router_from_config(&config).await;

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::Bind {
            message: format!("Failed to bind {address}: {e}"),
            location: ErrorLocation::caller(),
        })?;

    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Serve {
            message: format!("Server stopped: {e}"),
            location: ErrorLocation::caller(),
        })?;

    Ok(())
}
