use crate::error::model_error::ModelError;
use crate::{ErrorLocation, HttpStatusCode, StatusReport};

/// Builder for validated [`StatusReport`] instances.
#[derive(Debug, Default)]
pub struct StatusReportBuilder {
    code: Option<HttpStatusCode>,
    meaning: Option<String>,
    category: Option<String>,
    use_cases: Vec<String>,
}

impl StatusReportBuilder {
    pub fn with_code(mut self, code: impl Into<HttpStatusCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_use_cases(mut self, use_cases: Vec<String>) -> Self {
        self.use_cases = use_cases;
        self
    }

    /// Build the report, rejecting missing or empty text fields.
    #[track_caller]
    pub fn build(self) -> Result<StatusReport, ModelError> {
        let code = self.code.ok_or_else(|| ModelError::Validation {
            message: String::from("Status code is required"),
            location: ErrorLocation::caller(),
        })?;

        let meaning = self.meaning.ok_or_else(|| ModelError::Validation {
            message: String::from("Meaning is required"),
            location: ErrorLocation::caller(),
        })?;

        if meaning.trim().is_empty() {
            return Err(ModelError::Validation {
                message: format!("Meaning cannot be empty for status {code}"),
                location: ErrorLocation::caller(),
            });
        }

        let category = self.category.ok_or_else(|| ModelError::Validation {
            message: String::from("Category is required"),
            location: ErrorLocation::caller(),
        })?;

        if category.trim().is_empty() {
            return Err(ModelError::Validation {
                message: format!("Category cannot be empty for status {code}"),
                location: ErrorLocation::caller(),
            });
        }

        Ok(StatusReport {
            code,
            meaning,
            category,
            use_cases: self.use_cases,
        })
    }
}
