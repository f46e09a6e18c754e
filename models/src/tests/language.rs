use crate::LanguageTag;

/// **VALUE**: Verifies tags are case-insensitive at the boundary.
///
/// **WHY THIS MATTERS**: `?language=EN` and `?language=en` must produce identical
/// output; every table is keyed by lowercase tags.
///
/// **BUG THIS CATCHES**: Would catch the lowercase step being dropped.
#[test]
fn given_mixed_case_tag_when_parsed_then_lowercased() {
    assert_eq!(LanguageTag::parse(Some("EN")), LanguageTag::parse(Some("en")));
    assert_eq!(LanguageTag::parse(Some(" Fr ")).as_str(), "fr");
}

/// **VALUE**: Verifies absent, empty, and "undefined" tags default to English.
///
/// **WHY THIS MATTERS**: The query parameter is optional and browsers sometimes send
/// the string "undefined" for unset values.
///
/// **BUG THIS CATCHES**: Would catch an empty tag being used as a table key.
#[test]
fn given_missing_or_placeholder_tag_when_parsed_then_defaults_to_english() {
    for raw in [None, Some(""), Some("   "), Some("undefined"), Some("UNDEFINED")] {
        let tag = LanguageTag::parse(raw);
        assert!(tag.is_english(), "{raw:?} should default to en");
    }
}

/// **VALUE**: Verifies unknown tags are kept rather than rewritten.
///
/// **WHY THIS MATTERS**: The provider may know languages the bundled tables do not;
/// each table applies its own English fallback.
///
/// **BUG THIS CATCHES**: Would catch premature rewriting of unknown tags to "en".
#[test]
fn given_unknown_tag_when_parsed_then_kept_verbatim() {
    let tag = LanguageTag::from("XX");
    assert_eq!(tag.as_str(), "xx");
    assert!(!tag.is_english());
    assert_eq!(tag.to_string(), "xx");
}
