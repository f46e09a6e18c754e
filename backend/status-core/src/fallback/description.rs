use common::HttpStatusCode;

/// Ordered phrase rules used when no provider is configured.
///
/// Each rule is checked against the lowercased description; the first hit
/// wins. `Contains` rules match anywhere, so "ok" also catches "token".
const RULES: &[(PhraseRule, i64)] = &[
    (PhraseRule::Contains("not found"), 404),
    (PhraseRule::Contains("ok"), 200),
    (PhraseRule::Equals("success"), 200),
    (PhraseRule::Contains("bad request"), 400),
    (PhraseRule::Contains("unauthorized"), 401),
    (PhraseRule::Contains("forbidden"), 403),
    (PhraseRule::Contains("server error"), 500),
];

#[derive(Debug, Clone, Copy)]
enum PhraseRule {
    Contains(&'static str),
    Equals(&'static str),
}

impl PhraseRule {
    fn matches(&self, text: &str) -> bool {
        match self {
            PhraseRule::Contains(phrase) => text.contains(phrase),
            PhraseRule::Equals(phrase) => text == *phrase,
        }
    }
}

/// Best-effort keyword match of a free-text description.
pub fn match_description(description: &str) -> Option<HttpStatusCode> {
    let text = description.to_lowercase();

    RULES
        .iter()
        .find(|(rule, _)| rule.matches(&text))
        .map(|(_, code)| HttpStatusCode(*code))
}
