use common::StatusCategory::{
    self, ClientError, Informational, Redirection, ServerError, Success, Unknown,
};
use models::LanguageTag;

use std::collections::HashMap;

use once_cell::sync::Lazy;

type LabelRow = (StatusCategory, &'static str);

const EN: &[LabelRow] = &[
    (Informational, "Informational"),
    (Success, "Success"),
    (Redirection, "Redirection"),
    (ClientError, "Client Error"),
    (ServerError, "Server Error"),
    (Unknown, "Unknown"),
];

const ES: &[LabelRow] = &[
    (Informational, "Informativo"),
    (Success, "Éxito"),
    (Redirection, "Redirección"),
    (ClientError, "Error del Cliente"),
    (ServerError, "Error del Servidor"),
    (Unknown, "Desconocido"),
];

const FR: &[LabelRow] = &[
    (Informational, "Information"),
    (Success, "Succès"),
    (Redirection, "Redirection"),
    (ClientError, "Erreur Client"),
    (ServerError, "Erreur Serveur"),
    (Unknown, "Inconnu"),
];

const DE: &[LabelRow] = &[
    (Informational, "Information"),
    (Success, "Erfolg"),
    (Redirection, "Umleitung"),
    (ClientError, "Client-Fehler"),
    (ServerError, "Server-Fehler"),
    (Unknown, "Unbekannt"),
];

static LABELS: Lazy<HashMap<&'static str, HashMap<StatusCategory, &'static str>>> =
    Lazy::new(|| super::index(&[("en", EN), ("es", ES), ("fr", FR), ("de", DE)]));

/// Bundled label for `category` in exactly `language`.
pub fn category_label(category: StatusCategory, language: &LanguageTag) -> Option<&'static str> {
    LABELS
        .get(language.as_str())
        .and_then(|table| table.get(&category))
        .copied()
}
