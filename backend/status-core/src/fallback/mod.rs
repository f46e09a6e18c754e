//! Bundled, immutable fallback data.
//!
//! Consulted whenever the provider is absent or gives an unreliable answer.
//! Every table is keyed by lowercase language tag and built once on first
//! access; nothing mutates it afterwards.
//!
//! Lookups here are single-level: they answer for exactly the language
//! asked. The English fallback chain lives in the resolver so that each
//! step can be logged.

mod categories;
mod description;
mod languages;
mod meanings;
mod use_cases;

pub use categories::category_label;
pub use description::match_description;
pub use languages::{
    SUPPORTED_LANGUAGES, UiLabel, display_name, language_info, supported_languages, ui_label,
};
pub use meanings::meaning;
pub use use_cases::use_cases;

use std::collections::HashMap;
use std::hash::Hash;

/// Turn `(language, rows)` pairs into a language → key → value map.
fn index<K, V>(tables: &[(&'static str, &[(K, V)])]) -> HashMap<&'static str, HashMap<K, V>>
where
    K: Copy + Eq + Hash,
    V: Copy,
{
    tables
        .iter()
        .map(|(language, rows)| (*language, rows.iter().copied().collect()))
        .collect()
}
