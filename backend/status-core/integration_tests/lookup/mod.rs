use status_core::Resolver;
use status_core::catalog::{CatalogProvider, StatusCatalog};
use status_core::lookup::{LookupMode, demo_lookup, lookup_by_code, lookup_by_description};

use common::HttpStatusCode;

use std::sync::Arc;

// ============================================================================
// Public API tests for the lookup contract
// These use the default server setup: a resolver over the bundled catalog
// ============================================================================

fn default_resolver() -> Resolver {
    let catalog = StatusCatalog::bundled().expect("bundled catalog is valid");
    Resolver::with_provider(Arc::new(CatalogProvider::new(catalog)))
}

/// **VALUE**: Verifies the end-to-end report for a French 404.
///
/// **WHY THIS MATTERS**: This is the documented example of the service's output.
///
/// **BUG THIS CATCHES**: Would catch any layer dropping the French translation.
#[test]
fn given_404_in_french_when_looked_up_then_french_report() {
    let report = lookup_by_code(&default_resolver(), Some("404"), Some("fr")).expect("report");

    assert_eq!(report.code, HttpStatusCode(404));
    assert_eq!(
        report.meaning,
        "Non trouvé - Le serveur ne peut pas trouver la ressource demandée."
    );
    assert_eq!(report.category, "Erreur Client");
    assert_eq!(report.use_cases.len(), 3);
}

/// **VALUE**: Verifies codes absent from both catalog and tables get the default text.
///
/// **WHY THIS MATTERS**: The catalog's placeholder must never reach a client.
///
/// **BUG THIS CATCHES**: Would catch "Unknown status code" leaking through.
#[test]
fn given_unlisted_code_when_looked_up_then_default_meaning() {
    let report = lookup_by_code(&default_resolver(), Some("299"), None).expect("report");

    assert_eq!(report.meaning, "Status code 299");
    assert_eq!(report.category, "Success");
}

/// **VALUE**: Verifies catalog-only codes get catalog meanings.
///
/// **WHY THIS MATTERS**: The catalog covers far more codes than the tables.
///
/// **BUG THIS CATCHES**: Would catch the provider being bypassed.
#[test]
fn given_catalog_only_code_when_looked_up_then_catalog_meaning() {
    let report = lookup_by_code(&default_resolver(), Some("418"), Some("en")).expect("report");

    assert!(report.meaning.starts_with("I'm a teapot - "));
    assert_eq!(report.use_cases, vec!["Easter eggs and April Fools' jokes".to_string()]);
}

/// **VALUE**: Verifies catalog description search through the public API.
///
/// **WHY THIS MATTERS**: With the catalog configured, its search replaces the heuristic.
///
/// **BUG THIS CATCHES**: Would catch the lookup path calling the heuristic directly.
#[test]
fn given_description_when_looked_up_then_catalog_match() {
    let resolver = default_resolver();

    let report = lookup_by_description(&resolver, Some("rate limit hit"), Some("es"))
        .expect("report");
    let outcome = demo_lookup(&resolver, LookupMode::Description, Some("zzz qqq"), None);

    assert_eq!(report.code, HttpStatusCode(429));
    assert!(outcome.is_error());
}
