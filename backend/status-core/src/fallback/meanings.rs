use common::HttpStatusCode;
use models::LanguageTag;

use std::collections::HashMap;

use once_cell::sync::Lazy;

type MeaningRow = (i64, &'static str);

const EN: &[MeaningRow] = &[
    (200, "OK - The request has succeeded."),
    (201, "Created - The request has been fulfilled and resulted in a new resource being created."),
    (
        400,
        "Bad Request - The server cannot or will not process the request due to something that is perceived to be a client error.",
    ),
    (
        401,
        "Unauthorized - The request has not been applied because it lacks valid authentication credentials.",
    ),
    (403, "Forbidden - The server understood the request but refuses to authorize it."),
    (404, "Not Found - The server cannot find the requested resource."),
    (
        500,
        "Internal Server Error - The server has encountered a situation it doesn't know how to handle.",
    ),
    (503, "Service Unavailable - The server is not ready to handle the request."),
];

const ES: &[MeaningRow] = &[
    (200, "OK - La solicitud ha tenido éxito."),
    (201, "Creado - Se ha creado un nuevo recurso."),
    (
        400,
        "Solicitud incorrecta - El servidor no puede procesar la solicitud debido a un error del cliente.",
    ),
    (401, "No autorizado - Se requiere autenticación."),
    (403, "Prohibido - El servidor entendió la solicitud, pero se niega a autorizarla."),
    (404, "No encontrado - El servidor no puede encontrar el recurso solicitado."),
    (
        500,
        "Error interno del servidor - El servidor ha encontrado una situación que no sabe cómo manejar.",
    ),
    (503, "Servicio no disponible - El servidor no está disponible temporalmente."),
];

const FR: &[MeaningRow] = &[
    (200, "OK - La requête a réussi."),
    (201, "Créé - Une nouvelle ressource a été créée."),
    (
        400,
        "Mauvaise demande - Le serveur ne peut pas traiter la demande en raison d'une erreur client.",
    ),
    (401, "Non autorisé - L'authentification est nécessaire."),
    (403, "Interdit - Le serveur a compris la demande mais refuse de l'autoriser."),
    (404, "Non trouvé - Le serveur ne peut pas trouver la ressource demandée."),
    (
        500,
        "Erreur interne du serveur - Le serveur a rencontré une situation qu'il ne sait pas gérer.",
    ),
    (503, "Service indisponible - Le serveur est temporairement indisponible."),
];

const DE: &[MeaningRow] = &[
    (200, "OK - Die Anfrage war erfolgreich."),
    (201, "Erstellt - Eine neue Ressource wurde erstellt."),
    (
        400,
        "Fehlerhafte Anfrage - Der Server kann die Anfrage aufgrund eines Client-Fehlers nicht verarbeiten.",
    ),
    (401, "Nicht autorisiert - Authentifizierung ist erforderlich."),
    (
        403,
        "Verboten - Der Server hat die Anfrage verstanden, weigert sich jedoch, sie zu autorisieren.",
    ),
    (404, "Nicht gefunden - Der Server kann die angeforderte Ressource nicht finden."),
    (
        500,
        "Interner Serverfehler - Der Server hat eine Situation angetroffen, mit der er nicht umgehen kann.",
    ),
    (503, "Dienst nicht verfügbar - Der Server ist vorübergehend nicht verfügbar."),
];

const PT: &[MeaningRow] = &[
    (200, "OK - A solicitação foi bem-sucedida."),
    (404, "Não encontrado - O servidor não pode encontrar o recurso solicitado."),
    (500, "Erro interno do servidor - O servidor encontrou uma situação que não sabe como lidar."),
];

const IT: &[MeaningRow] = &[
    (200, "OK - La richiesta è stata completata con successo."),
    (404, "Non trovato - Il server non riesce a trovare la risorsa richiesta."),
    (
        500,
        "Errore interno del server - Il server ha riscontrato una situazione che non sa come gestire.",
    ),
];

const RU: &[MeaningRow] = &[
    (200, "OK - Запрос выполнен успешно."),
    (404, "Не найдено - Сервер не может найти запрашиваемый ресурс."),
    (
        500,
        "Внутренняя ошибка сервера - Сервер столкнулся с ситуацией, с которой он не знает, как справиться.",
    ),
];

const ZH: &[MeaningRow] = &[
    (200, "成功 - 请求成功。"),
    (404, "未找到 - 服务器找不到请求的资源。"),
    (500, "服务器内部错误 - 服务器遇到了一个不知如何处理的情况。"),
];

const JA: &[MeaningRow] = &[
    (200, "OK - リクエストは成功しました。"),
    (404, "見つかりません - サーバーは要求されたリソースを見つけることができません。"),
    (500, "サーバー内部エラー - サーバーは処理方法がわからない状況に遭遇しました。"),
];

const AR: &[MeaningRow] = &[
    (200, "تم - نجح الطلب."),
    (404, "غير موجود - لا يمكن للخادم العثور على المورد المطلوب."),
    (500, "خطأ داخلي في الخادم - واجه الخادم موقفًا لا يعرف كيفية التعامل معه."),
];

static MEANINGS: Lazy<HashMap<&'static str, HashMap<i64, &'static str>>> = Lazy::new(|| {
    super::index(&[
        ("en", EN),
        ("es", ES),
        ("fr", FR),
        ("de", DE),
        ("pt", PT),
        ("it", IT),
        ("ru", RU),
        ("zh", ZH),
        ("ja", JA),
        ("ar", AR),
    ])
});

/// Bundled meaning for `code` in exactly `language`.
pub fn meaning(code: HttpStatusCode, language: &LanguageTag) -> Option<&'static str> {
    MEANINGS
        .get(language.as_str())
        .and_then(|table| table.get(&code.value()))
        .copied()
}
