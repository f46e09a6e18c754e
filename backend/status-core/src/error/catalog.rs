use models::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("Catalog Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog Parse Error: {origin}: {reason} {location}")]
    Parse {
        location: ErrorLocation,
        origin: String,
        reason: String,
    },

    #[error("Catalog HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Catalog URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Catalog Validation Error: {reason} {location}")]
    Validation {
        location: ErrorLocation,
        reason: String,
    },
}

impl From<url::ParseError> for CatalogError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        CatalogError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        CatalogError::Http {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
