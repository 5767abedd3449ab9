use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidHandle(String),

    #[error("{0}")]
    EmptyHistory(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl AppError {
    /// The canonical error returned for a missing, malformed or unknown handle
    pub fn invalid_handle() -> Self {
        AppError::InvalidHandle("Invalid or missing username".to_string())
    }

    /// The canonical error returned for a handle with no submission history
    pub fn empty_history() -> Self {
        AppError::EmptyHistory("No submissions found for this user".to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidHandle(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::EmptyHistory(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Catalog(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// A single submission record that could not be used by the pipeline.
///
/// These never escape as an [`AppError`]; they are collected and logged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("malformed tag list: {0}")]
    MalformedTags(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid_handle().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::empty_history().into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ExternalApi("bad body".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            AppError::invalid_handle().to_string(),
            "Invalid or missing username"
        );
        assert_eq!(
            AppError::empty_history().to_string(),
            "No submissions found for this user"
        );
    }
}
