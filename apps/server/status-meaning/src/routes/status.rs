use crate::state::AppState;

use models::StatusReport;
use status_core::error::lookup::LookupError;
use status_core::lookup::{lookup_by_code, lookup_by_description};

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use log::{debug, error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Deserialize)]
pub(super) struct CodeQuery {
    code: Option<String>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DescriptionQuery {
    description: Option<String>,
    language: Option<String>,
}

/// GET /api/status-code
pub(super) async fn by_code(
    State(state): State<AppState>,
    query: Result<Query<CodeQuery>, QueryRejection>,
) -> ApiResult<StatusReport> {
    let Query(query) = query.map_err(|e| rejection_response(&e))?;

    lookup_by_code(
        &state.resolver,
        query.code.as_deref(),
        query.language.as_deref(),
    )
    .map(Json)
    .map_err(|e| error_response(&e))
}

/// GET /api/description
pub(super) async fn by_description(
    State(state): State<AppState>,
    query: Result<Query<DescriptionQuery>, QueryRejection>,
) -> ApiResult<StatusReport> {
    let Query(query) = query.map_err(|e| rejection_response(&e))?;

    lookup_by_description(
        &state.resolver,
        query.description.as_deref(),
        query.language.as_deref(),
    )
    .map(Json)
    .map_err(|e| error_response(&e))
}

fn error_response(e: &LookupError) -> (StatusCode, Json<ErrorResponse>) {
    let status = u16::try_from(e.http_status().value())
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!("Lookup failed: {e}");
    } else {
        debug!("Lookup rejected: {e}");
    }

    (
        status,
        Json(ErrorResponse {
            error: e.public_message().to_string(),
        }),
    )
}

/// Malformed query strings get the same `{error}` body as lookup failures.
fn rejection_response(e: &QueryRejection) -> (StatusCode, Json<ErrorResponse>) {
    debug!("Query rejected: {e}");

    (
        e.status(),
        Json(ErrorResponse {
            error: e.body_text(),
        }),
    )
}
