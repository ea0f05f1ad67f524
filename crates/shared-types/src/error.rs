use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors surfaced by the CampusLink API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    RateLimited,
    /// The request never produced an HTTP response.
    Network,
    InternalError,
}

impl AppErrorKind {
    /// Map an HTTP status code onto an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::InternalError,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::RateLimited => "RateLimited",
            AppErrorKind::Network => "Network",
            AppErrorKind::InternalError => "InternalError",
        };
        f.write_str(name)
    }
}

/// Error body shape returned by the backend.
///
/// The API is not consistent about the field name, so both `message` and
/// `error` are accepted. `errors` carries per-field validation messages.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: HashMap<String, String>,
}

/// Structured error shown by pages as inline alerts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// Uses the JSON `message`/`error` field when the body parses, the raw
    /// text when it is short plain text, and an empty message otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = AppErrorKind::from_status(status);
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self {
                kind,
                message: parsed.message.or(parsed.error).unwrap_or_default(),
                field_errors: parsed.errors,
            },
            Err(_) => {
                let text = body.trim();
                let message = if !text.is_empty() && text.len() <= 200 && !text.starts_with('<') {
                    text.to_string()
                } else {
                    String::new()
                };
                Self::new(kind, message)
            }
        }
    }

    /// Message suitable for an inline alert.
    ///
    /// The server message wins when present; otherwise a per-kind default.
    pub fn friendly_message(&self) -> String {
        if !self.message.is_empty() {
            return self.message.clone();
        }
        match self.kind {
            AppErrorKind::Unauthorized => "Your session has expired. Please sign in again.",
            AppErrorKind::Forbidden => "You do not have permission to view this resource.",
            AppErrorKind::NotFound => "The requested resource could not be found.",
            AppErrorKind::Network => "Unable to reach the server. Check your connection.",
            AppErrorKind::ValidationError | AppErrorKind::BadRequest => {
                "Some fields are invalid. Please review the form."
            }
            AppErrorKind::Conflict => "This record was changed by someone else.",
            AppErrorKind::RateLimited => "Too many requests. Please wait a moment.",
            AppErrorKind::InternalError => "Something went wrong. Please try again.",
        }
        .to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_reads_message_field() {
        let err = AppError::from_response(403, r#"{"message":"Teachers only"}"#);
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert_eq!(err.message, "Teachers only");
    }

    #[test]
    fn from_response_accepts_error_field() {
        let err = AppError::from_response(404, r#"{"error":"Class not found"}"#);
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.friendly_message(), "Class not found");
    }

    #[test]
    fn from_response_collects_field_errors() {
        let err = AppError::from_response(
            422,
            r#"{"message":"Validation failed","errors":{"title":"Title is required"}}"#,
        );
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("title").map(String::as_str), Some("Title is required"));
    }

    #[test]
    fn from_response_keeps_short_plain_text() {
        let err = AppError::from_response(500, "database unavailable");
        assert_eq!(err.message, "database unavailable");
    }

    #[test]
    fn from_response_drops_html_pages() {
        let err = AppError::from_response(502, "<html><body>Bad Gateway</body></html>");
        assert!(err.message.is_empty());
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn friendly_message_defaults_per_kind() {
        assert_eq!(
            AppError::forbidden("").friendly_message(),
            "You do not have permission to view this resource."
        );
        assert_eq!(
            AppError::network("").friendly_message(),
            "Unable to reach the server. Check your connection."
        );
    }

    #[test]
    fn unknown_status_maps_to_internal() {
        assert_eq!(AppErrorKind::from_status(418), AppErrorKind::InternalError);
        assert_eq!(AppErrorKind::from_status(503), AppErrorKind::InternalError);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::not_found("missing");
        assert_eq!(err.to_string(), "NotFound: missing");
    }
}
