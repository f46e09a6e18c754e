use crate::catalog::{CatalogEntry, StatusCatalog};
use crate::error::provider::ProviderError;
use crate::provider::StatusProvider;

use common::HttpStatusCode;
use models::LanguageTag;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// What the catalog answers for a code it does not list.
pub(crate) const UNKNOWN_MEANING: &str = "Unknown status code";

const SEPARATOR_PATTERN: &str = r"[^\p{L}\p{N}]+";

static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(SEPARATOR_PATTERN).expect("valid regex pattern"))
}

/// Lowercase and collapse every run of non-alphanumerics to one space.
pub(crate) fn normalize_text(text: &str) -> String {
    separator_regex()
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// Catalog language keys match `LanguageTag`: trimmed and lowercase.
fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase()
}

/// `needle` appears in `haystack` as whole words.
fn contains_words(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && format!(" {haystack} ").contains(&format!(" {needle} "))
}

struct SearchEntry {
    code: HttpStatusCode,
    title: String,
    keywords: Vec<String>,
}

/// [`StatusProvider`] backed by an in-memory [`StatusCatalog`].
///
/// English-centric like the upstream it stands in for: use cases come as
/// one list, and a meaning is only returned for languages the entry has.
pub struct CatalogProvider {
    languages: Vec<String>,
    entries: HashMap<i64, CatalogEntry>,
    category_labels: HashMap<String, HashMap<String, String>>,
    search: Vec<SearchEntry>,
}

impl CatalogProvider {
    pub fn new(catalog: StatusCatalog) -> Self {
        let mut statuses: Vec<CatalogEntry> = catalog
            .statuses
            .into_iter()
            .map(|mut entry| {
                entry.meaning = entry
                    .meaning
                    .into_iter()
                    .map(|(language, text)| (normalize_language(&language), text))
                    .collect();
                entry
            })
            .collect();
        statuses.sort_by_key(|entry| entry.code);

        let search = statuses
            .iter()
            .map(|entry| SearchEntry {
                code: HttpStatusCode(entry.code),
                title: normalize_text(&entry.title),
                keywords: entry
                    .keywords
                    .iter()
                    .map(|keyword| normalize_text(keyword))
                    .filter(|keyword| !keyword.is_empty())
                    .collect(),
            })
            .collect();

        let category_labels = catalog
            .category_labels
            .into_iter()
            .map(|(language, labels)| (normalize_language(&language), labels.into_iter().collect()))
            .collect();

        Self {
            languages: catalog.languages,
            entries: statuses.into_iter().map(|entry| (entry.code, entry)).collect(),
            category_labels,
            search,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn first_match<P>(&self, predicate: P) -> Option<HttpStatusCode>
    where
        P: Fn(&SearchEntry) -> bool,
    {
        self.search
            .iter()
            .find(|entry| predicate(entry))
            .map(|entry| entry.code)
    }
}

impl StatusProvider for CatalogProvider {
    fn meaning(
        &self,
        code: HttpStatusCode,
        language: &LanguageTag,
    ) -> Result<Option<String>, ProviderError> {
        let Some(entry) = self.entries.get(&code.value()) else {
            return Ok(Some(UNKNOWN_MEANING.to_string()));
        };

        Ok(entry.meaning.get(language.as_str()).cloned())
    }

    fn category(
        &self,
        code: HttpStatusCode,
        language: &LanguageTag,
    ) -> Result<Option<String>, ProviderError> {
        Ok(self
            .category_labels
            .get(language.as_str())
            .and_then(|labels| labels.get(code.category().name()))
            .cloned())
    }

    fn use_cases(&self, code: HttpStatusCode) -> Result<Vec<String>, ProviderError> {
        Ok(self
            .entries
            .get(&code.value())
            .map(|entry| entry.use_cases.clone())
            .unwrap_or_default())
    }

    /// Exact title, then title inside the text, then keyword inside the
    /// text, then every word of the text inside a title. Catalog order
    /// (ascending code) breaks ties.
    fn find_code_by_description(
        &self,
        description: &str,
    ) -> Result<Option<HttpStatusCode>, ProviderError> {
        let text = normalize_text(description);
        if text.is_empty() {
            return Ok(None);
        }

        let found = self
            .first_match(|entry| entry.title == text)
            .or_else(|| self.first_match(|entry| contains_words(&text, &entry.title)))
            .or_else(|| {
                self.first_match(|entry| {
                    entry
                        .keywords
                        .iter()
                        .any(|keyword| contains_words(&text, keyword))
                })
            })
            .or_else(|| {
                self.first_match(|entry| {
                    text.split(' ')
                        .all(|word| contains_words(&entry.title, word))
                })
            });

        Ok(found)
    }

    fn supported_languages(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.languages.clone())
    }
}
