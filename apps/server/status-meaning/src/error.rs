use models::ErrorLocation;
use status_core::error::config::ConfigError;

use thiserror::Error;

/// Errors that stop the server from starting or keep it from serving.
///
/// Request-level failures never land here; they are answered with an
/// error body by the route handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bind Error: {message} {location}")]
    Bind {
        message: String,
        location: ErrorLocation,
    },

    #[error("Serve Error: {message} {location}")]
    Serve {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for ServerError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ServerError::Config {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
