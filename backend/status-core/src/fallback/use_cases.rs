use common::HttpStatusCode;
use models::LanguageTag;

use std::collections::HashMap;

use once_cell::sync::Lazy;

type UseCaseRow = (i64, &'static [&'static str]);

// Most common scenario first; order is preserved all the way to the response.
const EN: &[UseCaseRow] = &[
    (
        100,
        &[
            "When uploading large files in chunks",
            "In WebSockets to confirm a handshake is in progress",
        ],
    ),
    (
        200,
        &[
            "Standard response for successful HTTP requests",
            "Response to successful GET requests",
            "When an API request completes successfully",
        ],
    ),
    (
        201,
        &[
            "After a POST request that creates a new resource",
            "When an item is successfully added to a database",
        ],
    ),
    (
        204,
        &[
            "After a successful DELETE operation",
            "When submitting a form that should not navigate away",
        ],
    ),
    (
        301,
        &[
            "When a website has moved permanently to a new domain",
            "Redirecting from old URLs to new URLs for SEO purposes",
        ],
    ),
    (
        302,
        &[
            "Temporary redirects during maintenance",
            "After a successful form submission to redirect to a confirmation page",
        ],
    ),
    (
        400,
        &[
            "When form validation fails",
            "When request parameters are missing or invalid",
            "When the JSON payload is malformed",
        ],
    ),
    (
        401,
        &[
            "When a user tries to access a resource without logging in",
            "When an API key is missing or invalid",
        ],
    ),
    (
        403,
        &[
            "When a user is logged in but lacks permission for a resource",
            "When IP-based restrictions prevent access",
        ],
    ),
    (
        404,
        &[
            "When a URL doesn't exist",
            "When a resource has been deleted",
            "To mask the existence of sensitive resources for security",
        ],
    ),
    (429, &["When rate limits have been exceeded", "To prevent brute force attacks"]),
    (
        500,
        &[
            "When an unhandled exception occurs",
            "During database connection failure",
            "When the server encounters an unexpected condition",
        ],
    ),
    (
        502,
        &[
            "When a proxy or load balancer can't reach the upstream server",
            "During server deployment or restart",
        ],
    ),
    (
        503,
        &[
            "During scheduled maintenance",
            "When the server is overloaded",
            "When a service is temporarily unavailable due to high traffic",
        ],
    ),
];

const ES: &[UseCaseRow] = &[
    (
        100,
        &[
            "Al cargar archivos grandes en fragmentos",
            "En WebSockets para confirmar que un protocolo de enlace está en progreso",
        ],
    ),
    (
        200,
        &[
            "Respuesta estándar para solicitudes HTTP exitosas",
            "Respuesta a solicitudes GET exitosas",
            "Cuando una solicitud de API se completa con éxito",
        ],
    ),
    (
        201,
        &[
            "Después de una solicitud POST que crea un nuevo recurso",
            "Cuando un elemento se agrega con éxito a una base de datos",
        ],
    ),
    (
        404,
        &[
            "Cuando una URL no existe",
            "Cuando un recurso ha sido eliminado",
            "Para enmascarar la existencia de recursos sensibles por seguridad",
        ],
    ),
    (
        500,
        &[
            "Cuando ocurre una excepción no controlada",
            "Durante un fallo de conexión a la base de datos",
            "Cuando el servidor encuentra una condición inesperada",
        ],
    ),
];

const FR: &[UseCaseRow] = &[
    (
        100,
        &[
            "Lors du téléchargement de gros fichiers par morceaux",
            "Dans WebSockets pour confirmer qu'une liaison est en cours",
        ],
    ),
    (
        200,
        &[
            "Réponse standard pour les requêtes HTTP réussies",
            "Réponse aux requêtes GET réussies",
            "Lorsqu'une requête API se termine avec succès",
        ],
    ),
    (
        201,
        &[
            "Après une requête POST qui crée une nouvelle ressource",
            "Lorsqu'un élément est ajouté avec succès à une base de données",
        ],
    ),
    (
        404,
        &[
            "Lorsqu'une URL n'existe pas",
            "Lorsqu'une ressource a été supprimée",
            "Pour masquer l'existence de ressources sensibles pour la sécurité",
        ],
    ),
    (
        500,
        &[
            "Lorsqu'une exception non gérée se produit",
            "Lors d'une défaillance de connexion à la base de données",
            "Lorsque le serveur rencontre une condition inattendue",
        ],
    ),
];

const DE: &[UseCaseRow] = &[
    (
        100,
        &[
            "Beim Hochladen großer Dateien in Teilen",
            "In WebSockets zur Bestätigung, dass ein Handshake im Gange ist",
        ],
    ),
    (
        200,
        &[
            "Standardantwort für erfolgreiche HTTP-Anfragen",
            "Antwort auf erfolgreiche GET-Anfragen",
            "Wenn eine API-Anfrage erfolgreich abgeschlossen wird",
        ],
    ),
    (
        201,
        &[
            "Nach einer POST-Anfrage, die eine neue Ressource erstellt",
            "Wenn ein Element erfolgreich einer Datenbank hinzugefügt wird",
        ],
    ),
    (
        404,
        &[
            "Wenn eine URL nicht existiert",
            "Wenn eine Ressource gelöscht wurde",
            "Um die Existenz sensibler Ressourcen aus Sicherheitsgründen zu maskieren",
        ],
    ),
    (
        500,
        &[
            "Wenn eine nicht behandelte Ausnahme auftritt",
            "Bei einem Datenbankverbindungsfehler",
            "Wenn der Server auf eine unerwartete Bedingung stößt",
        ],
    ),
];

const AR: &[UseCaseRow] = &[
    (
        100,
        &[
            "عند تحميل ملفات كبيرة على دفعات",
            "في بروتوكول WebSockets لتأكيد أن المصافحة قيد التقدم",
        ],
    ),
    (
        200,
        &[
            "استجابة قياسية لطلبات HTTP الناجحة",
            "استجابة لطلبات GET الناجحة",
            "عندما تكتمل طلب API بنجاح",
        ],
    ),
    (201, &["بعد طلب POST الذي ينشئ مورداً جديداً", "عند إضافة عنصر بنجاح إلى قاعدة بيانات"]),
    (404, &["عندما لا يوجد URL", "عندما تم حذف مورد", "لإخفاء وجود موارد حساسة للأمان"]),
    (
        500,
        &[
            "عند حدوث استثناء غير معالج",
            "أثناء فشل الاتصال بقاعدة البيانات",
            "عندما يواجه الخادم حالة غير متوقعة",
        ],
    ),
];

const ZH: &[UseCaseRow] = &[
    (100, &["当分块上传大文件时", "在WebSockets中确认握手正在进行"]),
    (200, &["成功HTTP请求的标准响应", "对成功GET请求的响应", "当API请求成功完成时"]),
    (201, &["在创建新资源的POST请求之后", "当项目成功添加到数据库时"]),
    (404, &["当URL不存在时", "当资源已被删除时", "出于安全原因掩盖敏感资源的存在"]),
    (500, &["当发生未处理的异常时", "在数据库连接失败期间", "当服务器遇到意外情况时"]),
];

static USE_CASES: Lazy<HashMap<&'static str, HashMap<i64, &'static [&'static str]>>> =
    Lazy::new(|| {
        super::index(&[
            ("en", EN),
            ("es", ES),
            ("fr", FR),
            ("de", DE),
            ("ar", AR),
            ("zh", ZH),
        ])
    });

/// Bundled scenarios for `code` in exactly `language`.
pub fn use_cases(code: HttpStatusCode, language: &LanguageTag) -> Option<&'static [&'static str]> {
    USE_CASES
        .get(language.as_str())
        .and_then(|table| table.get(&code.value()))
        .copied()
}
