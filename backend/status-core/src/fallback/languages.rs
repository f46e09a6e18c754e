use models::{LanguageInfo, LanguageTag};

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Languages offered when the provider cannot list its own.
pub const SUPPORTED_LANGUAGES: [&str; 10] =
    ["en", "es", "fr", "de", "pt", "it", "ru", "zh", "ja", "ar"];

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("pt", "Português"),
    ("it", "Italiano"),
    ("ru", "Русский"),
    ("zh", "中文"),
    ("ja", "日本語"),
    ("ar", "العربية"),
];

/// Headings the demo page shows around a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLabel {
    Category,
    CommonUseCases,
}

type UiRow = (UiLabel, &'static str);

const UI_TEXT: &[(&str, &[UiRow])] = &[
    ("en", &[(UiLabel::CommonUseCases, "Common Use Cases:"), (UiLabel::Category, "Category:")]),
    (
        "es",
        &[(UiLabel::CommonUseCases, "Casos de Uso Comunes:"), (UiLabel::Category, "Categoría:")],
    ),
    (
        "fr",
        &[
            (UiLabel::CommonUseCases, "Cas d'Utilisation Courants:"),
            (UiLabel::Category, "Catégorie:"),
        ],
    ),
    (
        "de",
        &[(UiLabel::CommonUseCases, "Häufige Anwendungsfälle:"), (UiLabel::Category, "Kategorie:")],
    ),
    ("pt", &[(UiLabel::CommonUseCases, "Casos de Uso Comuns:"), (UiLabel::Category, "Categoria:")]),
    ("it", &[(UiLabel::CommonUseCases, "Casi d'Uso Comuni:"), (UiLabel::Category, "Categoria:")]),
    (
        "ru",
        &[
            (UiLabel::CommonUseCases, "Распространенные случаи использования:"),
            (UiLabel::Category, "Категория:"),
        ],
    ),
    ("zh", &[(UiLabel::CommonUseCases, "常见用例:"), (UiLabel::Category, "类别:")]),
    ("ja", &[(UiLabel::CommonUseCases, "一般的な使用例:"), (UiLabel::Category, "カテゴリー:")]),
    ("ar", &[(UiLabel::CommonUseCases, "حالات الاستخدام الشائعة:"), (UiLabel::Category, "الفئة:")]),
];

static NAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DISPLAY_NAMES.iter().copied().collect());

static UI_LABELS: Lazy<HashMap<&'static str, HashMap<UiLabel, &'static str>>> =
    Lazy::new(|| super::index(UI_TEXT));

/// The fixed selector list, in display order.
pub fn supported_languages() -> Vec<LanguageTag> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|tag| LanguageTag::from(*tag))
        .collect()
}

/// Native name for a tag; unknown tags display upper-cased.
pub fn display_name(language: &LanguageTag) -> String {
    NAMES
        .get(language.as_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| language.as_str().to_uppercase())
}

/// Demo heading in `language`, English when that language lacks it.
pub fn ui_label(label: UiLabel, language: &LanguageTag) -> &'static str {
    UI_LABELS
        .get(language.as_str())
        .and_then(|table| table.get(&label))
        .or_else(|| UI_LABELS.get("en").and_then(|table| table.get(&label)))
        .copied()
        .unwrap_or_default()
}

/// Selector entry for a tag.
pub fn language_info(language: &LanguageTag) -> LanguageInfo {
    LanguageInfo::new(language.as_str(), display_name(language))
}
