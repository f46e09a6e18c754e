//! Request-level lookups shared by the HTTP endpoints and the demo page.
//!
//! These functions own input validation and the public error taxonomy;
//! resolution itself is delegated to [`Resolver`].

use crate::error::lookup::LookupError;
use crate::resolver::Resolver;

use common::HttpStatusCode;
use models::ErrorLocation;
use models::{LanguageTag, LookupOutcome, StatusReport};

use log::{debug, error};

pub const DEMO_INVALID_CODE_MESSAGE: &str = "Please enter a valid HTTP status code";
pub const DEMO_MISSING_DESCRIPTION_MESSAGE: &str = "Please enter a description";
pub const DEMO_NO_MATCH_MESSAGE: &str = "No matching status code found for this description";

/// How the demo interprets its query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    Code,
    Description,
}

impl LookupMode {
    /// `code` or `description`, case-insensitive; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "code" => Some(LookupMode::Code),
            "description" => Some(LookupMode::Description),
            _ => None,
        }
    }
}

/// Parse the leading integer of `raw`, ignoring trailing junk.
///
/// Leading whitespace and one sign are allowed, so `" 404"` and `"404abc"`
/// both give 404. Returns `None` when no digits lead the text or the value
/// does not fit.
pub fn parse_status_code(raw: &str) -> Option<HttpStatusCode> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    if digits_len == 0 {
        return None;
    }

    format!("{sign}{}", &rest[..digits_len])
        .parse::<i64>()
        .ok()
        .map(HttpStatusCode)
}

/// Lookup-by-code endpoint contract.
pub fn lookup_by_code(
    resolver: &Resolver,
    code: Option<&str>,
    language: Option<&str>,
) -> Result<StatusReport, LookupError> {
    let raw = code
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| LookupError::MissingCode {
            location: ErrorLocation::caller(),
        })?;

    let status = parse_status_code(raw).ok_or_else(|| LookupError::InvalidCode {
        input: raw.to_string(),
        location: ErrorLocation::caller(),
    })?;

    let language = LanguageTag::parse(language);
    debug!("Lookup by code {status} in {language}");

    describe(resolver, status, &language)
}

/// Lookup-by-description endpoint contract.
///
/// Blank descriptions count as missing.
pub fn lookup_by_description(
    resolver: &Resolver,
    description: Option<&str>,
    language: Option<&str>,
) -> Result<StatusReport, LookupError> {
    let description = description
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| LookupError::MissingDescription {
            location: ErrorLocation::caller(),
        })?;

    let status = resolver
        .find_code_by_description(description)
        .ok_or_else(|| LookupError::NoMatch {
            description: description.to_string(),
            location: ErrorLocation::caller(),
        })?;

    let language = LanguageTag::parse(language);
    debug!("Description {description:?} matched {status}, describing in {language}");

    describe(resolver, status, &language)
}

/// Demo-panel lookup: always an outcome, with the demo's own wording.
pub fn demo_lookup(
    resolver: &Resolver,
    mode: LookupMode,
    query: Option<&str>,
    language: Option<&str>,
) -> LookupOutcome {
    let query = query.unwrap_or_default();

    let result = match mode {
        LookupMode::Code => lookup_by_code(resolver, Some(query), language),
        LookupMode::Description => lookup_by_description(resolver, Some(query), language),
    };

    match result {
        Ok(report) => LookupOutcome::Found(report),
        Err(e) => LookupOutcome::failed(demo_message(&e)),
    }
}

fn demo_message(error: &LookupError) -> String {
    match error {
        LookupError::MissingCode { .. } | LookupError::InvalidCode { .. } => {
            DEMO_INVALID_CODE_MESSAGE.to_string()
        }
        LookupError::MissingDescription { .. } => DEMO_MISSING_DESCRIPTION_MESSAGE.to_string(),
        LookupError::NoMatch { .. } => DEMO_NO_MATCH_MESSAGE.to_string(),
        LookupError::Internal { message, .. } => message.clone(),
    }
}

#[track_caller]
fn describe(
    resolver: &Resolver,
    status: HttpStatusCode,
    language: &LanguageTag,
) -> Result<StatusReport, LookupError> {
    resolver.describe(status, language).map_err(|e| {
        error!("Failed to assemble report for {status}: {e}");
        LookupError::from(e)
    })
}
