//! Capability interface for an external status-meaning source.
//!
//! A provider is optional and unreliable by assumption. Every method has a
//! default "no answer" body so an implementation may cover any subset, and
//! the [`Resolver`](crate::resolver::Resolver) treats errors, panics, empty
//! answers and the literal marker `"Unknown"` as "ask the fallback tables".

use crate::error::provider::ProviderError;

use common::HttpStatusCode;
use models::LanguageTag;

pub trait StatusProvider: Send + Sync {
    /// Human-readable meaning of `code` in `language`.
    fn meaning(
        &self,
        _code: HttpStatusCode,
        _language: &LanguageTag,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    /// Localized category label for `code`.
    fn category(
        &self,
        _code: HttpStatusCode,
        _language: &LanguageTag,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    /// Example scenarios, most common first. Assumed to be English.
    fn use_cases(&self, _code: HttpStatusCode) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    fn find_code_by_description(
        &self,
        _description: &str,
    ) -> Result<Option<HttpStatusCode>, ProviderError> {
        Ok(None)
    }

    fn supported_languages(&self) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }
}
