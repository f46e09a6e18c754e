use crate::error::lookup::LookupError;
use crate::lookup::{
    DEMO_INVALID_CODE_MESSAGE, DEMO_MISSING_DESCRIPTION_MESSAGE, DEMO_NO_MATCH_MESSAGE,
    LookupMode, demo_lookup, lookup_by_code, lookup_by_description, parse_status_code,
};
use crate::resolver::Resolver;

use common::HttpStatusCode;
use models::LookupOutcome;

// ----------------------------------------------------------------------------
// parse_status_code
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the leading-integer parse rules.
///
/// **WHY THIS MATTERS**: Clients send `404`, ` 404`, and `404abc` and expect the same
/// report; values outside 100-599 are still valid input.
///
/// **BUG THIS CATCHES**: Would catch a strict `parse::<i64>()` rejecting trailing text.
#[test]
fn given_various_inputs_when_parsed_then_leading_integer_used() {
    let cases = [
        ("404", Some(404)),
        ("  404", Some(404)),
        ("404abc", Some(404)),
        ("+201", Some(201)),
        ("-5", Some(-5)),
        ("999", Some(999)),
        ("abc", None),
        ("", None),
        ("-", None),
        ("4.04", Some(4)),
        ("99999999999999999999999", None),
    ];

    for (raw, expected) in cases {
        assert_eq!(
            parse_status_code(raw).map(|code| code.value()),
            expected,
            "input {raw:?}"
        );
    }
}

// ----------------------------------------------------------------------------
// lookup_by_code
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies missing and non-numeric codes map to 400 errors.
///
/// **WHY THIS MATTERS**: The endpoint's status and body come straight from these.
///
/// **BUG THIS CATCHES**: Would catch the two messages being swapped.
#[test]
fn given_missing_or_invalid_code_when_looked_up_then_validation_errors() {
    let resolver = Resolver::without_provider();

    let missing = lookup_by_code(&resolver, None, None).expect_err("missing code");
    let empty = lookup_by_code(&resolver, Some(""), None).expect_err("empty code");
    let invalid = lookup_by_code(&resolver, Some("abc"), None).expect_err("invalid code");

    assert!(matches!(missing, LookupError::MissingCode { .. }));
    assert!(matches!(empty, LookupError::MissingCode { .. }));
    assert_eq!(missing.public_message(), "Status code is required");
    assert_eq!(invalid.public_message(), "Invalid status code format");
    assert_eq!(invalid.http_status(), HttpStatusCode(400));
}

/// **VALUE**: Verifies a valid code produces a localized report.
///
/// **WHY THIS MATTERS**: This is the main happy path of the service.
///
/// **BUG THIS CATCHES**: Would catch the language parameter being ignored.
#[test]
fn given_valid_code_and_language_when_looked_up_then_localized_report() {
    let resolver = Resolver::without_provider();

    let report = lookup_by_code(&resolver, Some("404"), Some("FR")).expect("report");

    assert_eq!(report.code, HttpStatusCode(404));
    assert_eq!(report.category, "Erreur Client");
}

/// **VALUE**: Verifies unusual codes still get a complete report.
///
/// **WHY THIS MATTERS**: Out-of-range integers are accepted and must not error.
///
/// **BUG THIS CATCHES**: Would catch range validation sneaking into the lookup.
#[test]
fn given_out_of_range_code_when_looked_up_then_default_report() {
    let resolver = Resolver::without_provider();

    let report = lookup_by_code(&resolver, Some("999"), None).expect("report");

    assert_eq!(report.meaning, "Status code 999");
    assert_eq!(report.category, "Unknown");
    assert!(report.use_cases.is_empty());
}

// ----------------------------------------------------------------------------
// lookup_by_description
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies description errors and the matched report.
///
/// **WHY THIS MATTERS**: A miss is a 404, a blank is a 400; clients rely on that split.
///
/// **BUG THIS CATCHES**: Would catch blank text being searched instead of rejected.
#[test]
fn given_descriptions_when_looked_up_then_report_or_error() {
    let resolver = Resolver::without_provider();

    let blank = lookup_by_description(&resolver, Some("   "), None).expect_err("blank");
    let missing = lookup_by_description(&resolver, None, None).expect_err("missing");
    let no_match =
        lookup_by_description(&resolver, Some("gibberish-xyz"), None).expect_err("no match");
    let report = lookup_by_description(&resolver, Some("Not Found"), Some("es")).expect("report");

    assert_eq!(blank.public_message(), "Description is required");
    assert_eq!(missing.http_status(), HttpStatusCode(400));
    assert_eq!(no_match.http_status(), HttpStatusCode(404));
    assert_eq!(no_match.public_message(), "No matching status code found");
    assert_eq!(report.code, HttpStatusCode(404));
    assert_eq!(report.category, "Error del Cliente");
}

// ----------------------------------------------------------------------------
// demo_lookup
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the demo wording for each failure.
///
/// **WHY THIS MATTERS**: The demo panel shows these strings directly to users.
///
/// **BUG THIS CATCHES**: Would catch API messages leaking into the demo panel.
#[test]
fn given_bad_demo_queries_when_looked_up_then_demo_messages() {
    let resolver = Resolver::without_provider();

    let cases = [
        (LookupMode::Code, None, DEMO_INVALID_CODE_MESSAGE),
        (LookupMode::Code, Some("abc"), DEMO_INVALID_CODE_MESSAGE),
        (LookupMode::Description, Some(""), DEMO_MISSING_DESCRIPTION_MESSAGE),
        (LookupMode::Description, Some("gibberish-xyz"), DEMO_NO_MATCH_MESSAGE),
    ];

    for (mode, query, expected) in cases {
        match demo_lookup(&resolver, mode, query, Some("en")) {
            LookupOutcome::Failed(failure) => assert_eq!(failure.message, expected),
            LookupOutcome::Found(report) => panic!("expected failure, got {report:?}"),
        }
    }
}

/// **VALUE**: Verifies a good demo query yields the report.
///
/// **WHY THIS MATTERS**: The demo loads with 404 pre-filled.
///
/// **BUG THIS CATCHES**: Would catch the demo path diverging from the API path.
#[test]
fn given_demo_code_query_when_looked_up_then_report() {
    let resolver = Resolver::without_provider();

    let outcome = demo_lookup(&resolver, LookupMode::Code, Some("404"), None);

    assert!(!outcome.is_error());
    assert_eq!(outcome.report().map(|report| report.code), Some(HttpStatusCode(404)));
}

/// **VALUE**: Verifies mode parsing.
///
/// **WHY THIS MATTERS**: The mode arrives as a query parameter.
///
/// **BUG THIS CATCHES**: Would catch case-sensitive matching.
#[test]
fn given_mode_strings_when_parsed_then_modes() {
    assert_eq!(LookupMode::parse("code"), Some(LookupMode::Code));
    assert_eq!(LookupMode::parse(" Description "), Some(LookupMode::Description));
    assert_eq!(LookupMode::parse("other"), None);
}
