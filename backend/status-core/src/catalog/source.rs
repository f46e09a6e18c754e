use crate::catalog::{CatalogProvider, StatusCatalog};
use crate::config::CatalogSettings;
use crate::error::catalog::CatalogError;
use crate::provider::StatusProvider;

use std::sync::Arc;

use log::{info, warn};

/// Build the provider described by `settings`.
///
/// Source precedence: URL, then file path, then the bundled catalog.
/// Any failure leaves the provider absent; the resolver then runs on the
/// fallback tables alone.
pub async fn load_provider(settings: &CatalogSettings) -> Option<Arc<dyn StatusProvider>> {
    if !settings.enabled {
        info!("Status catalog disabled, resolving from fallback tables only");
        return None;
    }

    match load_catalog(settings).await {
        Ok(catalog) => {
            let provider = CatalogProvider::new(catalog);
            info!("Status catalog provider ready with {} statuses", provider.len());
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!("Status catalog unavailable, resolving from fallback tables only: {e}");
            None
        }
    }
}

async fn load_catalog(settings: &CatalogSettings) -> Result<StatusCatalog, CatalogError> {
    if let Some(url) = &settings.url {
        return StatusCatalog::fetch(url).await;
    }

    if let Some(path) = &settings.path {
        return StatusCatalog::load_from_path(path);
    }

    StatusCatalog::bundled()
}
