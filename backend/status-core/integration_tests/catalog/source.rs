use super::fetch::REMOTE_CATALOG;

use status_core::Resolver;
use status_core::catalog::load_provider;
use status_core::config::CatalogSettings;

use common::HttpStatusCode;
use models::LanguageTag;

use std::path::PathBuf;

use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(path: Option<PathBuf>, url: Option<String>) -> CatalogSettings {
    CatalogSettings {
        enabled: true,
        path,
        url,
    }
}

/// **VALUE**: Verifies a disabled catalog yields no provider.
///
/// **WHY THIS MATTERS**: Operators can force table-only resolution.
///
/// **BUG THIS CATCHES**: Would catch the `enabled` flag being ignored.
#[tokio::test]
async fn given_disabled_catalog_when_loaded_then_no_provider() {
    let disabled = CatalogSettings {
        enabled: false,
        ..CatalogSettings::default()
    };

    assert!(load_provider(&disabled).await.is_none());
}

/// **VALUE**: Verifies the bundled catalog is the default source.
///
/// **WHY THIS MATTERS**: Out of the box the service should have the full catalog.
///
/// **BUG THIS CATCHES**: Would catch the bundled resource not being wired in.
#[tokio::test]
async fn given_default_settings_when_loaded_then_bundled_provider() {
    let provider = load_provider(&CatalogSettings::default())
        .await
        .expect("bundled provider");
    let resolver = Resolver::with_provider(provider);

    assert_eq!(
        resolver.find_code_by_description("teapot"),
        Some(HttpStatusCode(418))
    );
}

/// **VALUE**: Verifies an unreachable or broken source leaves the provider absent.
///
/// **WHY THIS MATTERS**: Startup must survive a dead catalog host or a bad file.
///
/// **BUG THIS CATCHES**: Would catch a load error aborting startup.
#[tokio::test]
async fn given_failing_sources_when_loaded_then_no_provider() {
    // GIVEN: A server that always fails, and a path that does not exist
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");

    // WHEN: Loading from each
    let from_url = load_provider(&settings(None, Some(server.uri()))).await;
    let from_path = load_provider(&settings(Some(dir.path().join("missing.toml")), None)).await;

    // THEN: No provider either way
    assert!(from_url.is_none());
    assert!(from_path.is_none());
}

/// **VALUE**: Verifies a URL outranks a path, and a path outranks the bundle.
///
/// **WHY THIS MATTERS**: Source precedence decides which data the service serves.
///
/// **BUG THIS CATCHES**: Would catch the path shadowing the configured URL.
#[tokio::test]
async fn given_url_and_path_when_loaded_then_url_used() {
    // GIVEN: A remote catalog and an on-disk one with different languages
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REMOTE_CATALOG))
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("catalog.toml");
    std::fs::write(&file, REMOTE_CATALOG.replace("\"nl\"", "\"sv\"")).expect("write catalog");

    // WHEN: Loading with both, and with the path alone
    let both = load_provider(&settings(Some(file.clone()), Some(server.uri())))
        .await
        .expect("remote provider");
    let path_only = load_provider(&settings(Some(file), None))
        .await
        .expect("file provider");

    // THEN: Each resolver lists its source's languages
    let listed = |provider| {
        Resolver::with_provider(provider)
            .supported_languages()
            .iter()
            .map(|tag| tag.as_str().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(listed(both), vec!["en", "nl"]);
    assert_eq!(listed(path_only), vec!["en", "sv"]);
}

/// **VALUE**: Verifies remote meanings in extra languages reach reports.
///
/// **WHY THIS MATTERS**: A catalog can add languages the bundled tables lack.
///
/// **BUG THIS CATCHES**: Would catch provider meanings being ignored for unknown tags.
#[tokio::test]
async fn given_remote_language_when_described_then_remote_meaning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REMOTE_CATALOG))
        .mount(&server)
        .await;

    let provider = load_provider(&settings(None, Some(server.uri())))
        .await
        .expect("remote provider");
    let report = Resolver::with_provider(provider)
        .describe(HttpStatusCode(404), &LanguageTag::from("nl"))
        .expect("report");

    assert_eq!(report.meaning, "Niet gevonden - Externe tekst.");
    assert_eq!(report.category, "Client Error");
}
