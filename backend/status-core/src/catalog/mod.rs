//! Status catalog: the data behind [`CatalogProvider`].
//!
//! A catalog is a TOML document listing status entries with per-language
//! meanings, optional category labels, English use cases and search
//! keywords. One ships with the crate; another can be read from disk or
//! fetched from a URL at startup.

mod provider;
mod source;

pub use provider::CatalogProvider;
pub use source::load_provider;

use crate::error::catalog::CatalogError;

use models::ErrorLocation;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../resources/catalog.toml");
const BUNDLED_CATALOG_ORIGIN: &str = "<bundled catalog>";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const REQUIRED_MEANING_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusCatalog {
    #[serde(default)]
    pub languages: Vec<String>,

    /// Category name ("Client Error") → label, per language.
    #[serde(default)]
    pub category_labels: BTreeMap<String, BTreeMap<String, String>>,

    #[serde(default, rename = "status")]
    pub statuses: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub code: i64,
    pub title: String,
    #[serde(default)]
    pub meaning: BTreeMap<String, String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl StatusCatalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::parse(BUNDLED_CATALOG, BUNDLED_CATALOG_ORIGIN)
    }

    /// Parse and validate catalog text. `origin` only labels errors.
    pub fn parse(contents: &str, origin: &str) -> Result<Self, CatalogError> {
        let catalog: StatusCatalog =
            toml::from_str(contents).map_err(|e| CatalogError::Parse {
                location: ErrorLocation::caller(),
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;

        catalog.validate()?;

        debug!(
            "Parsed catalog from {origin}: {} statuses, {} languages",
            catalog.statuses.len(),
            catalog.languages.len()
        );
        Ok(catalog)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            location: ErrorLocation::caller(),
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = Self::parse(&contents, &path.display().to_string())?;
        info!("Catalog loaded from {}", path.display());
        Ok(catalog)
    }

    /// Download a catalog once. The body must be the same TOML format.
    pub async fn fetch(url_str: &str) -> Result<Self, CatalogError> {
        let url = Url::parse(url_str)?;
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;

        let response = client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Http {
                message: format!(
                    "HTTP {} - {}",
                    response.status().as_u16(),
                    response.text().await.unwrap_or_default()
                ),
                location: ErrorLocation::caller(),
            });
        }

        let body = response.text().await?;
        let catalog = Self::parse(&body, url.as_str())?;
        info!("Catalog fetched from {url}");
        Ok(catalog)
    }

    /// Reject duplicate codes, blank titles, and entries without English text.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for entry in &self.statuses {
            if !seen.insert(entry.code) {
                return Err(CatalogError::Validation {
                    location: ErrorLocation::caller(),
                    reason: format!("Duplicate status code {}", entry.code),
                });
            }

            if entry.title.trim().is_empty() {
                return Err(CatalogError::Validation {
                    location: ErrorLocation::caller(),
                    reason: format!("Status {} has an empty title", entry.code),
                });
            }

            let has_english = entry.meaning.iter().any(|(language, text)| {
                language.trim().eq_ignore_ascii_case(REQUIRED_MEANING_LANGUAGE)
                    && !text.trim().is_empty()
            });

            if !has_english {
                return Err(CatalogError::Validation {
                    location: ErrorLocation::caller(),
                    reason: format!(
                        "Status {} is missing an '{REQUIRED_MEANING_LANGUAGE}' meaning",
                        entry.code
                    ),
                });
            }
        }

        Ok(())
    }
}
