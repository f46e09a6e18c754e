pub mod builder;

use crate::HttpStatusCode;

use serde::{Deserialize, Serialize};

/// Resolved metadata for one status code in one language.
///
/// `meaning` and `category` are never empty; only `use_cases` may be.
/// Construct through [`builder::StatusReportBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub code: HttpStatusCode,
    pub meaning: String,
    pub category: String,
    pub use_cases: Vec<String>,
}
