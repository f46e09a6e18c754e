use crate::state::AppState;

use models::{LanguageInfo, LanguageTag, LookupOutcome};
use status_core::fallback::{UiLabel, language_info, ui_label};
use status_core::lookup::{LookupMode, demo_lookup};

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{Html, Json};
use log::debug;
use serde::{Deserialize, Serialize};

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub labels: UiLabels,
}

/// Result-panel headings in the selected language.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiLabels {
    pub category: String,
    pub common_use_cases: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct LanguageQuery {
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LookupQuery {
    mode: Option<String>,
    query: Option<String>,
    language: Option<String>,
}

/// GET /
pub(super) async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// GET /api/languages
pub(super) async fn languages(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Json<LanguagesResponse> {
    // An unreadable query string just means the default language.
    let requested = query.ok().and_then(|Query(query)| query.language);
    let language = LanguageTag::parse(requested.as_deref());

    let languages = state
        .resolver
        .supported_languages()
        .iter()
        .map(language_info)
        .collect();

    Json(LanguagesResponse {
        languages,
        labels: UiLabels {
            category: ui_label(UiLabel::Category, &language).to_string(),
            common_use_cases: ui_label(UiLabel::CommonUseCases, &language).to_string(),
        },
    })
}

/// GET /api/lookup
///
/// Always 200; failures, including a malformed query string, come back as
/// `{error: true, message}`. A missing or unrecognized mode means lookup by
/// code.
pub(super) async fn lookup(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Json<LookupOutcome> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            debug!("Demo query rejected: {e}");
            return Json(LookupOutcome::failed(e.body_text()));
        }
    };

    let mode = query
        .mode
        .as_deref()
        .and_then(LookupMode::parse)
        .unwrap_or(LookupMode::Code);

    Json(demo_lookup(
        &state.resolver,
        mode,
        query.query.as_deref(),
        query.language.as_deref(),
    ))
}
