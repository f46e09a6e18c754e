//! Provider-first, table-second resolution of status metadata.
//!
//! Each operation asks the provider (if any) inside [`isolate`], judges the
//! answer, and otherwise walks the bundled tables: requested language,
//! then English, then a computed default. Nothing in here returns an error
//! for provider trouble; the worst case is a degraded but non-empty value.

use crate::error::provider::ProviderError;
use crate::fallback;
use crate::provider::StatusProvider;

use common::{HttpStatusCode, StatusCategory};
use models::{LanguageTag, ModelError, StatusReport, StatusReportBuilder};

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use log::{debug, warn};

/// Substring that marks a provider meaning as a placeholder.
const UNRELIABLE_MEANING_MARKER: &str = "Unknown";

#[derive(Clone, Default)]
pub struct Resolver {
    provider: Option<Arc<dyn StatusProvider>>,
}

impl Resolver {
    pub fn new(provider: Option<Arc<dyn StatusProvider>>) -> Self {
        Self { provider }
    }

    pub fn with_provider(provider: Arc<dyn StatusProvider>) -> Self {
        Self::new(Some(provider))
    }

    /// Resolver that only ever consults the bundled tables.
    pub fn without_provider() -> Self {
        Self::new(None)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Meaning of `code`; never empty.
    pub fn resolve_meaning(&self, code: HttpStatusCode, language: &LanguageTag) -> String {
        let Some(provider) = &self.provider else {
            debug!("meaning({code}, {language}): no provider, using fallback tables");
            return fallback_meaning(code, language);
        };

        match isolate("meaning", || provider.meaning(code, language)).flatten() {
            Some(meaning)
                if !meaning.trim().is_empty() && !meaning.contains(UNRELIABLE_MEANING_MARKER) =>
            {
                debug!("meaning({code}, {language}): provider");
                meaning
            }
            answer => {
                debug!("meaning({code}, {language}): unreliable provider answer {answer:?}");
                fallback_meaning(code, language)
            }
        }
    }

    /// Category label of `code`; never empty.
    pub fn resolve_category(&self, code: HttpStatusCode, language: &LanguageTag) -> String {
        let category = code.category();

        let Some(provider) = &self.provider else {
            debug!("category({code}, {language}): no provider, using fallback tables");
            return fallback_category(category, language);
        };

        match isolate("category", || provider.category(code, language)).flatten() {
            Some(label) if !label.trim().is_empty() => {
                debug!("category({code}, {language}): provider");
                label
            }
            _ => {
                debug!("category({code}, {language}): no usable provider label");
                fallback_category(category, language)
            }
        }
    }

    /// Example scenarios for `code`; may be empty, order preserved.
    pub fn resolve_use_cases(&self, code: HttpStatusCode, language: &LanguageTag) -> Vec<String> {
        let localized = fallback::use_cases(code, language);

        let Some(provider) = &self.provider else {
            debug!("use_cases({code}, {language}): no provider, using fallback tables");
            return fallback_use_cases(code, language, localized);
        };

        let from_provider = isolate("use_cases", || provider.use_cases(code)).unwrap_or_default();

        if from_provider.is_empty() {
            debug!("use_cases({code}, {language}): provider had none");
            return fallback_use_cases(code, language, localized);
        }

        // The provider only speaks English; a bundled translation outranks it.
        if let Some(translated) = localized
            && !language.is_english()
        {
            debug!("use_cases({code}, {language}): localized table preferred over provider");
            return to_owned_list(translated);
        }

        debug!("use_cases({code}, {language}): provider");
        from_provider
    }

    /// Status code best matching a free-text description.
    ///
    /// With a provider configured, its answer is final: the keyword
    /// heuristic is only used when there is no provider at all.
    pub fn find_code_by_description(&self, description: &str) -> Option<HttpStatusCode> {
        let Some(provider) = &self.provider else {
            let found = fallback::match_description(description);
            debug!("find_code_by_description({description:?}): heuristic -> {found:?}");
            return found;
        };

        let found = isolate("find_code_by_description", || {
            provider.find_code_by_description(description)
        })
        .flatten()
        .filter(|code| code.value() != 0);

        debug!("find_code_by_description({description:?}): provider -> {found:?}");
        found
    }

    /// Languages for the selector: the provider's list, else the bundled ten.
    pub fn supported_languages(&self) -> Vec<LanguageTag> {
        let from_provider = self
            .provider
            .as_ref()
            .and_then(|provider| isolate("supported_languages", || provider.supported_languages()))
            .unwrap_or_default();

        let mut languages: Vec<LanguageTag> = Vec::with_capacity(from_provider.len());
        for raw in from_provider.iter().filter(|raw| !raw.trim().is_empty()) {
            let tag = LanguageTag::from(raw.as_str());
            if !languages.contains(&tag) {
                languages.push(tag);
            }
        }

        if languages.is_empty() {
            debug!("supported_languages: using bundled list");
            return fallback::supported_languages();
        }

        languages
    }

    /// Full report for `code` in `language`.
    #[track_caller]
    pub fn describe(
        &self,
        code: HttpStatusCode,
        language: &LanguageTag,
    ) -> Result<StatusReport, ModelError> {
        StatusReportBuilder::default()
            .with_code(code)
            .with_meaning(self.resolve_meaning(code, language))
            .with_category(self.resolve_category(code, language))
            .with_use_cases(self.resolve_use_cases(code, language))
            .build()
    }
}

/// Run one provider call, turning errors and panics into `None`.
fn isolate<T, F>(operation: &str, call: F) -> Option<T>
where
    F: FnOnce() -> Result<T, ProviderError>,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            warn!("Provider {operation} failed, degrading to fallback: {error}");
            None
        }
        Err(payload) => {
            warn!(
                "Provider {operation} panicked, degrading to fallback: {}",
                panic_message(payload.as_ref())
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

fn fallback_meaning(code: HttpStatusCode, language: &LanguageTag) -> String {
    if let Some(meaning) = fallback::meaning(code, language) {
        return meaning.to_string();
    }

    if let Some(meaning) = fallback::meaning(code, &LanguageTag::english()) {
        debug!("meaning({code}, {language}): English table");
        return meaning.to_string();
    }

    debug!("meaning({code}, {language}): default text");
    format!("Status code {code}")
}

fn fallback_category(category: StatusCategory, language: &LanguageTag) -> String {
    fallback::category_label(category, language)
        .or_else(|| fallback::category_label(category, &LanguageTag::english()))
        .unwrap_or(category.name())
        .to_string()
}

fn fallback_use_cases(
    code: HttpStatusCode,
    language: &LanguageTag,
    localized: Option<&'static [&'static str]>,
) -> Vec<String> {
    match localized.or_else(|| fallback::use_cases(code, &LanguageTag::english())) {
        Some(list) => to_owned_list(list),
        None => {
            debug!("use_cases({code}, {language}): none bundled");
            Vec::new()
        }
    }
}

fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|item| item.to_string()).collect()
}
