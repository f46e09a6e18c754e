use super::helpers::{catalog_router, get_json, tables_only_router};

use axum::http::StatusCode;
use serde_json::json;

// ============================================================================
// Public HTTP contract for /api/status-code and /api/description
// ============================================================================

/// **VALUE**: Verifies the French 404 scenario end to end.
///
/// **WHY THIS MATTERS**: This is the reference response shape clients code against.
///
/// **BUG THIS CATCHES**: Would catch a renamed field (e.g. `use_cases` instead of
/// `useCases`) or the language parameter being dropped by the handler.
#[tokio::test]
async fn given_404_in_french_when_requested_then_french_report() {
    // GIVEN: The default catalog-backed router
    let router = catalog_router();

    // WHEN: Looking up 404 in French
    let (status, body) = get_json(router, "/api/status-code?code=404&language=fr").await;

    // THEN: 200 with French meaning and category
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], json!(404));
    assert_eq!(
        body["meaning"],
        json!("Non trouvé - Le serveur ne peut pas trouver la ressource demandée.")
    );
    assert_eq!(body["category"], json!("Erreur Client"));
    assert_eq!(body["useCases"].as_array().map(Vec::len), Some(3));
}

/// **VALUE**: Verifies non-numeric codes are a 400 with the exact message.
///
/// **WHY THIS MATTERS**: Clients show this message verbatim.
///
/// **BUG THIS CATCHES**: Would catch a 500 or a framework rejection body.
#[tokio::test]
async fn given_non_numeric_code_when_requested_then_bad_request() {
    let (status, body) = get_json(tables_only_router(), "/api/status-code?code=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid status code format" }));
}

/// **VALUE**: Verifies a missing code is a 400 naming the parameter.
///
/// **WHY THIS MATTERS**: Distinguishes "you forgot it" from "it is malformed".
///
/// **BUG THIS CATCHES**: Would catch both cases sharing one message.
#[tokio::test]
async fn given_missing_code_when_requested_then_bad_request() {
    for uri in ["/api/status-code", "/api/status-code?code="] {
        let (status, body) = get_json(tables_only_router(), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Status code is required" }), "{uri}");
    }
}

/// **VALUE**: Verifies trailing junk after the digits is ignored.
///
/// **WHY THIS MATTERS**: `404abc` has always resolved to 404.
///
/// **BUG THIS CATCHES**: Would catch a strict integer parse at the HTTP layer.
#[tokio::test]
async fn given_code_with_trailing_text_when_requested_then_leading_number_used() {
    let (status, body) = get_json(tables_only_router(), "/api/status-code?code=503xyz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], json!(503));
    assert_eq!(body["category"], json!("Server Error"));
}

/// **VALUE**: Verifies a description with no match is a 404.
///
/// **WHY THIS MATTERS**: "No match" is an expected outcome, not a server fault.
///
/// **BUG THIS CATCHES**: Would catch a 200 with an empty body or a 500.
#[tokio::test]
async fn given_unmatched_description_when_requested_then_not_found() {
    for router in [tables_only_router(), catalog_router()] {
        let (status, body) = get_json(router, "/api/description?description=xyz-no-match").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "No matching status code found" }));
    }
}

/// **VALUE**: Verifies a missing description is a 400.
///
/// **WHY THIS MATTERS**: Blank input must never be searched.
///
/// **BUG THIS CATCHES**: Would catch blank text reaching the matcher.
#[tokio::test]
async fn given_missing_description_when_requested_then_bad_request() {
    for uri in ["/api/description", "/api/description?description=%20%20"] {
        let (status, body) = get_json(tables_only_router(), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Description is required" }), "{uri}");
    }
}

/// **VALUE**: Verifies a matching description returns the localized report.
///
/// **WHY THIS MATTERS**: Description lookup shares the code lookup's result shape.
///
/// **BUG THIS CATCHES**: Would catch the language being ignored after a match.
#[tokio::test]
async fn given_matching_description_when_requested_then_report() {
    let (status, body) = get_json(
        tables_only_router(),
        "/api/description?description=Not%20Found&language=de",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], json!(404));
    assert_eq!(body["category"], json!("Client-Fehler"));
}

/// **VALUE**: Verifies a query string the extractor cannot read still gets a JSON error.
///
/// **WHY THIS MATTERS**: Clients parse every error body as `{error}`; a plain-text
/// framework message breaks them.
///
/// **BUG THIS CATCHES**: Would catch the query extractor rejection bypassing the
/// handler's error shape.
#[tokio::test]
async fn given_duplicated_query_parameter_when_requested_then_json_bad_request() {
    for uri in [
        "/api/status-code?code=404&code=500",
        "/api/description?description=ok&description=forbidden",
    ] {
        // WHEN: The same parameter is sent twice
        let (status, body) = get_json(tables_only_router(), uri).await;

        // THEN: 400 with a JSON error message
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(
            body["error"].as_str().is_some_and(|text| !text.is_empty()),
            "{uri} gave {body}"
        );
    }
}
