use common::HttpStatusCode;
use models::ErrorLocation;
use models::ModelError;

use thiserror::Error as ThisError;

pub const MISSING_CODE_MESSAGE: &str = "Status code is required";
pub const INVALID_CODE_MESSAGE: &str = "Invalid status code format";
pub const MISSING_DESCRIPTION_MESSAGE: &str = "Description is required";
pub const NO_MATCH_MESSAGE: &str = "No matching status code found";

/// Failures a lookup request can surface to its caller.
///
/// Provider trouble is not represented here; it never escapes the resolver.
#[derive(Debug, ThisError)]
pub enum LookupError {
    #[error("Validation Error: Status code is required {location}")]
    MissingCode { location: ErrorLocation },

    #[error("Validation Error: Invalid status code format: {input:?} {location}")]
    InvalidCode {
        input: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: Description is required {location}")]
    MissingDescription { location: ErrorLocation },

    #[error("Not Found Error: No matching status code found: {description:?} {location}")]
    NoMatch {
        description: String,
        location: ErrorLocation,
    },

    #[error("Internal Error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl LookupError {
    /// HTTP status a responder should use for this failure.
    pub fn http_status(&self) -> HttpStatusCode {
        match self {
            LookupError::MissingCode { .. }
            | LookupError::InvalidCode { .. }
            | LookupError::MissingDescription { .. } => HttpStatusCode(400),
            LookupError::NoMatch { .. } => HttpStatusCode(404),
            LookupError::Internal { .. } => HttpStatusCode(500),
        }
    }

    /// Message safe to return in a response body.
    pub fn public_message(&self) -> &str {
        match self {
            LookupError::MissingCode { .. } => MISSING_CODE_MESSAGE,
            LookupError::InvalidCode { .. } => INVALID_CODE_MESSAGE,
            LookupError::MissingDescription { .. } => MISSING_DESCRIPTION_MESSAGE,
            LookupError::NoMatch { .. } => NO_MATCH_MESSAGE,
            LookupError::Internal { message, .. } => message,
        }
    }
}

impl From<ModelError> for LookupError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let message = match error {
            ModelError::Validation { message, .. } => message,
        };
        LookupError::Internal {
            message,
            location: ErrorLocation::caller(),
        }
    }
}
