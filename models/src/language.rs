//! Language tags and selector entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag used whenever a caller supplies nothing usable.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Placeholder some clients send for an unset language.
const UNDEFINED_LANGUAGE: &str = "undefined";

/// A normalized, lowercase language identifier such as `en` or `es`.
///
/// Normalization happens once at the boundary. Unrecognized tags are kept
/// as-is; each lookup table falls back to [`DEFAULT_LANGUAGE`] on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Normalize an optional raw tag, defaulting to English.
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = raw
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty() && value != UNDEFINED_LANGUAGE);

        match normalized {
            Some(tag) => LanguageTag(tag),
            None => Self::english(),
        }
    }

    pub fn english() -> Self {
        LanguageTag(DEFAULT_LANGUAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == DEFAULT_LANGUAGE
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::english()
    }
}

impl From<&str> for LanguageTag {
    fn from(raw: &str) -> Self {
        Self::parse(Some(raw))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the demo's language selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

impl LanguageInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
