//! Domain models for status-code lookups.
//!
//! Pure data structures passed between the resolver, the lookup service and
//! the HTTP layer. Models carry validation but no resolution logic.

pub mod error;
pub mod language;
pub mod lookup_outcome;
pub mod status_report;

#[cfg(test)]
mod tests;

pub use common::{HttpStatusCode, StatusCategory};
pub use error::error_location::ErrorLocation;
pub use error::model_error::ModelError;
pub use language::{LanguageInfo, LanguageTag};
pub use lookup_outcome::{LookupFailure, LookupOutcome};
pub use status_report::StatusReport;
pub use status_report::builder::StatusReportBuilder;
