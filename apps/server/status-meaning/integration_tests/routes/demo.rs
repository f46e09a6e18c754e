use super::helpers::{catalog_router, get, get_json, tables_only_router};

use status_meaning::create_router_from_config;

use status_core::config::{AppConfig, CatalogSettings};

use axum::http::StatusCode;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Demo page and its helper endpoints
// ============================================================================

/// **VALUE**: Verifies the demo page is served at the root.
///
/// **WHY THIS MATTERS**: It is the only human-facing entry point.
///
/// **BUG THIS CATCHES**: Would catch the page route or embedded asset going missing.
#[tokio::test]
async fn given_root_when_requested_then_demo_page() {
    let (status, body) = get(tables_only_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>HTTP Status Code Meaning</title>"));
    assert!(body.contains("/api/lookup"));
}

/// **VALUE**: Verifies the health endpoint.
///
/// **WHY THIS MATTERS**: Load balancers poll it.
///
/// **BUG THIS CATCHES**: Would catch the route being unregistered.
#[tokio::test]
async fn given_health_route_when_requested_then_ok() {
    let (status, body) = get_json(tables_only_router(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

/// **VALUE**: Verifies the language list and translated headings.
///
/// **WHY THIS MATTERS**: The selector and result headings are built from this.
///
/// **BUG THIS CATCHES**: Would catch the labels ignoring the requested language.
#[tokio::test]
async fn given_languages_route_when_requested_then_list_and_labels() {
    let (status, body) = get_json(catalog_router(), "/api/languages?language=es").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["languages"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["languages"][1], json!({ "code": "es", "name": "Español" }));
    assert_eq!(body["labels"]["category"], json!("Categoría:"));
    assert_eq!(body["labels"]["commonUseCases"], json!("Casos de Uso Comunes:"));
}

/// **VALUE**: Verifies the demo lookup always answers 200 with an outcome.
///
/// **WHY THIS MATTERS**: The page renders either a report or a message from one call.
///
/// **BUG THIS CATCHES**: Would catch API errors leaking into the demo as HTTP errors.
#[tokio::test]
async fn given_demo_lookups_when_requested_then_outcomes() {
    let (found_status, found) =
        get_json(tables_only_router(), "/api/lookup?mode=code&query=404&language=en").await;
    let (failed_status, failed) =
        get_json(tables_only_router(), "/api/lookup?mode=description&query=zzz").await;
    let (_, invalid) = get_json(tables_only_router(), "/api/lookup?query=abc").await;

    assert_eq!(found_status, StatusCode::OK);
    assert_eq!(found["code"], json!(404));
    assert_eq!(found["category"], json!("Client Error"));

    assert_eq!(failed_status, StatusCode::OK);
    assert_eq!(
        failed,
        json!({ "error": true, "message": "No matching status code found for this description" })
    );
    assert_eq!(invalid["message"], json!("Please enter a valid HTTP status code"));
}

/// **VALUE**: Verifies a broken catalog setting still yields a working router.
///
/// **WHY THIS MATTERS**: The server must start and answer from the tables when the
/// catalog cannot be loaded.
///
/// **BUG THIS CATCHES**: Would catch catalog failures aborting router construction.
#[tokio::test]
async fn given_missing_catalog_file_when_router_built_then_tables_answer() {
    // GIVEN: Config pointing at a catalog file that does not exist
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig {
        catalog: CatalogSettings {
            enabled: true,
            path: Some(dir.path().join("missing.toml")),
            url: None,
        },
        ..AppConfig::default()
    };

    // WHEN: Building the router and looking up 500 in Spanish
    let router = create_router_from_config(&config).await;
    let (status, body) = get_json(router, "/api/status-code?code=500&language=es").await;

    // THEN: Table-sourced Spanish report
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], json!("Error del Servidor"));
    assert!(
        body["meaning"]
            .as_str()
            .is_some_and(|text| text.starts_with("Error interno del servidor"))
    );
}

/// **VALUE**: Verifies the demo endpoints stay usable with an unreadable query string.
///
/// **WHY THIS MATTERS**: The page always expects JSON it can render.
///
/// **BUG THIS CATCHES**: Would catch a plain-text rejection reaching the demo.
#[tokio::test]
async fn given_duplicated_demo_parameters_when_requested_then_json_answers() {
    let (lookup_status, outcome) =
        get_json(tables_only_router(), "/api/lookup?query=404&query=500").await;
    let (languages_status, languages) =
        get_json(tables_only_router(), "/api/languages?language=es&language=fr").await;

    assert_eq!(lookup_status, StatusCode::OK);
    assert_eq!(outcome["error"], json!(true));
    assert!(outcome["message"].is_string());

    assert_eq!(languages_status, StatusCode::OK);
    assert_eq!(languages["labels"]["category"], json!("Category:"));
}

/// **VALUE**: Verifies a language change re-resolves the shown result by its code.
///
/// **WHY THIS MATTERS**: After a description search the query box holds text, and
/// after a tab switch it is empty; either way the visible status must be translated.
///
/// **BUG THIS CATCHES**: Would catch the page re-running the raw query box (or nothing)
/// instead of looking up the last shown code in the new language.
#[tokio::test]
async fn given_shown_result_when_language_changed_then_last_code_relooked_up() {
    let (_, page) = get(tables_only_router(), "/").await;

    assert!(page.contains("lastCode: null"));
    assert!(page.contains("state.lastCode = outcome.code;"));
    assert!(page.contains(r#"await lookup("code", String(state.lastCode));"#));
    assert!(page.contains("await relookupLastCode();"));

    let (_, by_description) =
        get_json(tables_only_router(), "/api/lookup?mode=description&query=not%20found").await;
    let code = by_description["code"].as_i64().expect("description resolved to a code");
    let (status, french) = get_json(
        tables_only_router(),
        &format!("/api/lookup?mode=code&query={code}&language=fr"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(french["code"], json!(404));
    assert_eq!(
        french["meaning"],
        json!("Non trouvé - Le serveur ne peut pas trouver la ressource demandée.")
    );
}
