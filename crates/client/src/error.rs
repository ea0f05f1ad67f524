use shared_types::{AppError, AppErrorKind};
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the session token. The session has already been
    /// cleared by the time this is returned.
    #[error("session rejected by the server")]
    Unauthorized,

    /// Non-success response other than a session rejection.
    #[error("{0}")]
    App(AppError),

    /// No HTTP response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success status with a body that does not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn kind(&self) -> AppErrorKind {
        match self {
            ApiError::Unauthorized => AppErrorKind::Unauthorized,
            ApiError::App(err) => err.kind,
            ApiError::Network(_) => AppErrorKind::Network,
            ApiError::Decode(_) => AppErrorKind::InternalError,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text for an inline alert.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::App(err) => err.friendly_message(),
            ApiError::Network(_) => AppError::network("").friendly_message(),
            ApiError::Unauthorized => AppError::unauthorized("").friendly_message(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }

    /// Per-field messages from a validation failure.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::App(err) => err.field_errors.get(field).map(String::as_str),
            _ => None,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_uses_server_message_first() {
        let err = ApiError::App(AppError::from_response(403, r#"{"message":"Teachers only"}"#));
        assert_eq!(err.kind(), AppErrorKind::Forbidden);
        assert_eq!(err.user_message(), "Teachers only");
    }

    #[test]
    fn empty_forbidden_gets_default_text() {
        let err = ApiError::App(AppError::from_response(403, ""));
        assert_eq!(
            err.user_message(),
            "You do not have permission to view this resource."
        );
    }

    #[test]
    fn validation_field_errors_are_exposed() {
        let err = ApiError::App(AppError::from_response(
            422,
            r#"{"message":"Invalid","errors":{"due_date":"must be in the future"}}"#,
        ));
        assert_eq!(err.field_error("due_date"), Some("must be in the future"));
        assert_eq!(err.field_error("title"), None);
    }

    #[test]
    fn unauthorized_is_flagged() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Decode("eof".into()).is_unauthorized());
    }
}
