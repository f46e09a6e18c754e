use crate::fallback::{
    SUPPORTED_LANGUAGES, UiLabel, category_label, display_name, match_description, meaning,
    supported_languages, ui_label, use_cases,
};

use common::{HttpStatusCode, StatusCategory};
use models::LanguageTag;

// ----------------------------------------------------------------------------
// Meanings and categories
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the bundled tables answer in the requested language.
///
/// **WHY THIS MATTERS**: These tables are the only data source when no provider is
/// configured; a French caller must get French text.
///
/// **BUG THIS CATCHES**: Would catch a table being registered under the wrong tag.
#[test]
fn given_french_tag_when_meaning_looked_up_then_french_text_returned() {
    // GIVEN: The French tag
    let fr = LanguageTag::from("fr");

    // WHEN: Looking up 404
    let text = meaning(HttpStatusCode(404), &fr);

    // THEN: The French row is returned
    assert_eq!(
        text,
        Some("Non trouvé - Le serveur ne peut pas trouver la ressource demandée.")
    );
    assert_eq!(
        category_label(StatusCategory::ClientError, &fr),
        Some("Erreur Client")
    );
}

/// **VALUE**: Verifies table lookups are single-level and never guess.
///
/// **WHY THIS MATTERS**: The English fallback chain lives in the resolver; if the
/// tables silently answered in English, the resolver could not tell the difference.
///
/// **BUG THIS CATCHES**: Would catch an accidental English fallback inside a table.
#[test]
fn given_language_without_row_when_meaning_looked_up_then_none() {
    // GIVEN: Portuguese, which has no row for 201
    let pt = LanguageTag::from("pt");

    // WHEN/THEN: No row, and no category table at all
    assert_eq!(meaning(HttpStatusCode(201), &pt), None);
    assert_eq!(category_label(StatusCategory::Success, &pt), None);
    assert!(meaning(HttpStatusCode(201), &LanguageTag::english()).is_some());
}

/// **VALUE**: Verifies every language with a category table labels all categories.
///
/// **WHY THIS MATTERS**: A hole in one table would leak the English label into an
/// otherwise translated page.
///
/// **BUG THIS CATCHES**: Would catch a missing row when a category is added.
#[test]
fn given_category_tables_when_each_category_looked_up_then_all_labelled() {
    for tag in ["en", "es", "fr", "de"] {
        let language = LanguageTag::from(tag);
        for category in StatusCategory::ALL {
            let label = category_label(category, &language);
            assert!(
                label.is_some_and(|text| !text.is_empty()),
                "{tag} has no label for {category:?}"
            );
        }
    }
}

// ----------------------------------------------------------------------------
// Use cases
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies English use cases cover the codes the demo highlights.
///
/// **WHY THIS MATTERS**: 429 and 502 only exist in the English table; losing them
/// would blank those result panels.
///
/// **BUG THIS CATCHES**: Would catch the English table shrinking to the localized set.
#[test]
fn given_english_when_use_cases_looked_up_then_extended_set_present() {
    let en = LanguageTag::english();

    for code in [100, 200, 201, 204, 301, 302, 400, 401, 403, 404, 429, 500, 502, 503] {
        let list = use_cases(HttpStatusCode(code), &en);
        assert!(list.is_some_and(|items| !items.is_empty()), "no use cases for {code}");
    }

    assert_eq!(use_cases(HttpStatusCode(418), &en), None);
}

/// **VALUE**: Verifies localized use cases keep their order.
///
/// **WHY THIS MATTERS**: Lists are ordered most common first and rendered as-is.
///
/// **BUG THIS CATCHES**: Would catch the rows being stored in a set.
#[test]
fn given_spanish_when_use_cases_looked_up_then_order_preserved() {
    let list = use_cases(HttpStatusCode(404), &LanguageTag::from("es")).unwrap_or_default();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0], "Cuando una URL no existe");
}

// ----------------------------------------------------------------------------
// Description heuristic
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the keyword rules and their precedence.
///
/// **WHY THIS MATTERS**: Rules are checked in order; "not found" must win before the
/// broad "ok" rule gets a chance.
///
/// **BUG THIS CATCHES**: Would catch reordered or case-sensitive rules.
#[test]
fn given_known_phrases_when_matched_then_expected_codes() {
    let cases = [
        ("Not Found", Some(404)),
        ("page NOT FOUND ok", Some(404)),
        ("ok", Some(200)),
        ("success", Some(200)),
        ("Bad Request", Some(400)),
        ("unauthorized access", Some(401)),
        ("forbidden", Some(403)),
        ("internal server error", Some(500)),
        ("gibberish-xyz", None),
    ];

    for (text, expected) in cases {
        assert_eq!(
            match_description(text).map(|code| code.value()),
            expected,
            "description {text:?}"
        );
    }
}

/// **VALUE**: Documents that "success" only matches as the whole text.
///
/// **WHY THIS MATTERS**: The rule set mixes substring and exact rules; this pins the
/// exact one.
///
/// **BUG THIS CATCHES**: Would catch "success" turning into a substring rule.
#[test]
fn given_success_inside_sentence_when_matched_then_not_found() {
    assert_eq!(match_description("great success here"), None);
}

// ----------------------------------------------------------------------------
// Languages
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the selector list and its native display names.
///
/// **WHY THIS MATTERS**: The demo builds its dropdown from this list in order.
///
/// **BUG THIS CATCHES**: Would catch a reordered or truncated list.
#[test]
fn given_bundled_languages_when_listed_then_ten_in_order_with_names() {
    let languages = supported_languages();

    assert_eq!(languages.len(), SUPPORTED_LANGUAGES.len());
    assert_eq!(languages[0].as_str(), "en");
    assert_eq!(languages[9].as_str(), "ar");
    assert_eq!(display_name(&LanguageTag::from("de")), "Deutsch");
    assert_eq!(display_name(&LanguageTag::from("ja")), "日本語");
    assert_eq!(display_name(&LanguageTag::from("xx")), "XX");
}

/// **VALUE**: Verifies demo headings fall back to English for unknown tags.
///
/// **WHY THIS MATTERS**: The page must always have a heading to show.
///
/// **BUG THIS CATCHES**: Would catch an empty heading for an unlisted language.
#[test]
fn given_unknown_language_when_ui_label_requested_then_english_heading() {
    assert_eq!(ui_label(UiLabel::Category, &LanguageTag::from("xx")), "Category:");
    assert_eq!(
        ui_label(UiLabel::CommonUseCases, &LanguageTag::from("es")),
        "Casos de Uso Comunes:"
    );
}

/// **VALUE**: Verifies every selectable language has its own headings and name.
///
/// **WHY THIS MATTERS**: The heading table is laid out one row per language; a row
/// lost or split wrong while reformatting would quietly fall back to English.
///
/// **BUG THIS CATCHES**: Would catch a language in the selector with no heading row
/// or no native display name.
#[test]
fn given_supported_languages_when_headings_requested_then_each_has_its_own() {
    for tag in SUPPORTED_LANGUAGES {
        let language = LanguageTag::from(tag);

        assert_ne!(display_name(&language), tag.to_uppercase(), "{tag} display name");

        if tag != "en" {
            assert_ne!(
                ui_label(UiLabel::Category, &language),
                "Category:",
                "{tag} category heading"
            );
            assert_ne!(
                ui_label(UiLabel::CommonUseCases, &language),
                "Common Use Cases:",
                "{tag} use case heading"
            );
        }
    }

    assert_eq!(ui_label(UiLabel::Category, &LanguageTag::from("ru")), "Категория:");
    assert_eq!(ui_label(UiLabel::CommonUseCases, &LanguageTag::from("ja")), "一般的な使用例:");
}
