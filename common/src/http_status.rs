//! HTTP status codes and their range-derived categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HTTP status code as supplied by a caller.
///
/// Any integer is accepted; codes outside `100..600` are simply
/// categorized as [`StatusCategory::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HttpStatusCode(pub i64);

impl HttpStatusCode {
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// 1xx informational responses.
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.0)
    }

    /// 2xx successful responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 3xx redirections.
    pub fn is_redirection(&self) -> bool {
        (300..400).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Category derived purely from the numeric range.
    pub fn category(&self) -> StatusCategory {
        StatusCategory::from_code(*self)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(i64::from(code))
    }
}

impl From<i64> for HttpStatusCode {
    fn from(code: i64) -> Self {
        HttpStatusCode(code)
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse classification of a status code.
///
/// The set is closed. Derivation never consults anything but the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    #[serde(rename = "Client Error")]
    ClientError,
    #[serde(rename = "Server Error")]
    ServerError,
    Unknown,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 6] = [
        StatusCategory::Informational,
        StatusCategory::Success,
        StatusCategory::Redirection,
        StatusCategory::ClientError,
        StatusCategory::ServerError,
        StatusCategory::Unknown,
    ];

    pub fn from_code(code: HttpStatusCode) -> Self {
        if code.is_informational() {
            StatusCategory::Informational
        } else if code.is_success() {
            StatusCategory::Success
        } else if code.is_redirection() {
            StatusCategory::Redirection
        } else if code.is_client_error() {
            StatusCategory::ClientError
        } else if code.is_server_error() {
            StatusCategory::ServerError
        } else {
            StatusCategory::Unknown
        }
    }

    /// Unlocalized display name, also the key of the label tables.
    pub const fn name(&self) -> &'static str {
        match self {
            StatusCategory::Informational => "Informational",
            StatusCategory::Success => "Success",
            StatusCategory::Redirection => "Redirection",
            StatusCategory::ClientError => "Client Error",
            StatusCategory::ServerError => "Server Error",
            StatusCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
