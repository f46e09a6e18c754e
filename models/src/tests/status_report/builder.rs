use crate::{HttpStatusCode, ModelError, StatusReportBuilder};

fn complete_builder() -> StatusReportBuilder {
    StatusReportBuilder::default()
        .with_code(404u16)
        .with_meaning("Not Found - The server cannot find the requested resource.")
        .with_category("Client Error")
        .with_use_cases(vec![String::from("When a URL doesn't exist")])
}

/// **VALUE**: Verifies a fully populated builder produces the expected report.
///
/// **WHY THIS MATTERS**: Every endpoint response is built here. A field swap would
/// show the category where the meaning belongs.
///
/// **BUG THIS CATCHES**: Would catch fields being dropped or reordered during build.
#[test]
fn given_all_fields_when_building_status_report_then_succeeds() {
    // GIVEN: A builder with every field set
    // WHEN: Building
    let report = complete_builder().build().expect("complete builder should build");

    // THEN: Fields are carried through verbatim
    assert_eq!(report.code, HttpStatusCode(404));
    assert!(report.meaning.starts_with("Not Found"));
    assert_eq!(report.category, "Client Error");
    assert_eq!(report.use_cases.len(), 1);
}

/// **VALUE**: Verifies an empty meaning is rejected.
///
/// **WHY THIS MATTERS**: Meaning is never allowed to be empty; the resolver degrades to
/// "Status code {code}" instead. A blank meaning reaching the builder is a logic bug.
///
/// **BUG THIS CATCHES**: Would catch removal of the blank-meaning check.
#[test]
fn given_blank_meaning_when_building_then_returns_validation_error() {
    // GIVEN: Builder whose meaning is whitespace
    let builder = complete_builder().with_meaning("   ");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the code
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Meaning cannot be empty for status 404");
        }
    }
}

/// **VALUE**: Verifies a missing category is rejected.
///
/// **WHY THIS MATTERS**: Category is always present in responses, even when degraded.
///
/// **BUG THIS CATCHES**: Would catch the builder defaulting category to an empty string.
#[test]
fn given_missing_category_when_building_then_returns_validation_error() {
    // GIVEN: Builder without category
    let builder = StatusReportBuilder::default()
        .with_code(200u16)
        .with_meaning("OK");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Category is required");
        }
    }
}

/// **VALUE**: Verifies empty use cases are accepted.
///
/// **WHY THIS MATTERS**: Use cases are the one field allowed to be empty; most codes
/// have no bundled scenarios.
///
/// **BUG THIS CATCHES**: Would catch over-eager validation rejecting empty lists.
#[test]
fn given_no_use_cases_when_building_then_succeeds_with_empty_list() {
    let report = StatusReportBuilder::default()
        .with_code(418u16)
        .with_meaning("Status code 418")
        .with_category("Client Error")
        .build()
        .expect("empty use cases are valid");

    assert!(report.use_cases.is_empty());
}

/// **VALUE**: Verifies the wire field names.
///
/// **WHY THIS MATTERS**: Clients read `useCases` (camelCase), not `use_cases`.
///
/// **BUG THIS CATCHES**: Would catch removal of `rename_all = "camelCase"`.
#[test]
fn given_report_when_serialized_then_uses_camel_case_fields() {
    let report = complete_builder().build().unwrap();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["code"], 404);
    assert!(json.get("useCases").is_some(), "Should expose useCases");
    assert!(json.get("use_cases").is_none());
}
