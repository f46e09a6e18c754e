//! HTTP surface: the two lookup endpoints, the demo page and its helpers.

mod demo;
mod status;

pub use demo::{LanguagesResponse, UiLabels};
pub use status::ErrorResponse;

use crate::state::AppState;
use crate::{
    DESCRIPTION_ROUTE, HEALTH_ROUTE, INDEX_ROUTE, LANGUAGES_ROUTE, LOOKUP_ROUTE,
    STATUS_CODE_ROUTE,
};

use axum::Router;
use axum::response::Json;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(INDEX_ROUTE, get(demo::index))
        .route(HEALTH_ROUTE, get(health_check))
        .route(STATUS_CODE_ROUTE, get(status::by_code))
        .route(DESCRIPTION_ROUTE, get(status::by_description))
        .route(LANGUAGES_ROUTE, get(demo::languages))
        .route(LOOKUP_ROUTE, get(demo::lookup))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
