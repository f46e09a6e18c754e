use models::ErrorLocation;

use thiserror::Error as ThisError;

/// A provider call that could not produce an answer.
///
/// Never reaches an endpoint caller: the resolver absorbs it and degrades
/// to the bundled tables.
#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error("Provider Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}
