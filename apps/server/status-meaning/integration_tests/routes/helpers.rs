use status_meaning::create_router;
use status_meaning::state::AppState;

use status_core::Resolver;
use status_core::catalog::{CatalogProvider, StatusCatalog};

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router that only consults the bundled fallback tables.
pub fn tables_only_router() -> Router {
    create_router(AppState::default())
}

/// Router over the bundled catalog, as the server runs by default.
pub fn catalog_router() -> Router {
    let catalog = StatusCatalog::bundled().expect("bundled catalog is valid");
    create_router(AppState::new(Resolver::with_provider(Arc::new(
        CatalogProvider::new(catalog),
    ))))
}

/// Send one GET and return status plus raw body.
pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();

    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

/// Send one GET and parse the body as JSON.
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    let json = serde_json::from_str(&body).expect("JSON body");
    (status, json)
}
