use status_core::catalog::StatusCatalog;
use status_core::error::catalog::CatalogError;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Remote catalog download
// These exercise StatusCatalog::fetch against a local mock HTTP server
// ============================================================================

pub(super) const REMOTE_CATALOG: &str = r#"
languages = ["en", "nl"]

[[status]]
code = 404
title = "Not Found"
keywords = ["missing"]
[status.meaning]
en = "Not Found - Remote text."
nl = "Niet gevonden - Externe tekst."
"#;

/// **VALUE**: Verifies a served catalog is downloaded and parsed.
///
/// **WHY THIS MATTERS**: Deployments point the service at a shared catalog URL.
///
/// **BUG THIS CATCHES**: Would catch the body being parsed as anything but TOML.
#[tokio::test]
async fn given_served_catalog_when_fetched_then_parsed() {
    // GIVEN: A server returning a valid catalog
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog.toml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REMOTE_CATALOG))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching it
    let catalog = StatusCatalog::fetch(&format!("{}/catalog.toml", server.uri()))
        .await
        .expect("catalog should download");

    // THEN: Content matches
    assert_eq!(catalog.languages, vec!["en".to_string(), "nl".to_string()]);
    assert_eq!(catalog.statuses.len(), 1);
    assert_eq!(catalog.statuses[0].code, 404);
}

/// **VALUE**: Verifies non-2xx responses are HTTP errors carrying the status.
///
/// **WHY THIS MATTERS**: An error page must never be parsed as a catalog.
///
/// **BUG THIS CATCHES**: Would catch the status check being skipped.
#[tokio::test]
async fn given_server_error_when_fetched_then_http_error() {
    // GIVEN: A failing server
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    // WHEN: Fetching
    let error = StatusCatalog::fetch(&server.uri())
        .await
        .expect_err("fetch should fail");

    // THEN: HTTP error with status
    assert!(matches!(error, CatalogError::Http { .. }));
    assert!(error.to_string().contains("HTTP 500"));
}

/// **VALUE**: Verifies invalid catalog bodies are rejected.
///
/// **WHY THIS MATTERS**: A 200 with garbage must not become an empty provider.
///
/// **BUG THIS CATCHES**: Would catch parse failures being ignored after download.
#[tokio::test]
async fn given_garbage_body_when_fetched_then_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not toml</html>"))
        .mount(&server)
        .await;

    let error = StatusCatalog::fetch(&server.uri())
        .await
        .expect_err("fetch should fail");

    assert!(matches!(error, CatalogError::Parse { .. }));
}

/// **VALUE**: Verifies malformed URLs fail before any request.
///
/// **WHY THIS MATTERS**: Config typos should give a clear error.
///
/// **BUG THIS CATCHES**: Would catch URL parsing being delegated to the HTTP client.
#[tokio::test]
async fn given_malformed_url_when_fetched_then_url_parse_error() {
    let error = StatusCatalog::fetch("not a url")
        .await
        .expect_err("fetch should fail");

    assert!(matches!(error, CatalogError::UrlParse { .. }));
}
