// Library exports for testing
// The binary (main.rs) imports these as well

pub mod error;
pub mod logger;
pub mod routes;
pub mod state;


pub use routes::create_router;

use crate::state::AppState;

use status_core::Resolver;
use status_core::catalog::load_provider;
use status_core::config::AppConfig;

use axum::Router;
use const_format::concatcp;
use log::info;

pub const API_PREFIX: &str = "/api";
pub const INDEX_ROUTE: &str = "/";
pub const HEALTH_ROUTE: &str = concatcp!(API_PREFIX, "/health");
pub const STATUS_CODE_ROUTE: &str = concatcp!(API_PREFIX, "/status-code");
pub const DESCRIPTION_ROUTE: &str = concatcp!(API_PREFIX, "/description");
pub const LANGUAGES_ROUTE: &str = concatcp!(API_PREFIX, "/languages");
pub const LOOKUP_ROUTE: &str = concatcp!(API_PREFIX, "/lookup");

/// Router over the provider `config` describes, or over the fallback
/// tables alone when that provider cannot be loaded.
pub async fn create_router_from_config(config: &AppConfig) -> Router {
    let resolver = Resolver::new(load_provider(&config.catalog).await);

    if resolver.has_provider() {
        info!("Resolving with the status catalog, fallback tables as backup");
    } else {
        info!("Resolving from fallback tables only");
    }

    create_router(AppState::new(resolver))
}
