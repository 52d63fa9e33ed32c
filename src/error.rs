use axum::{http::StatusCode, response::Json as ResponseJson};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Serde(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::ConfirmationRequired(_) => StatusCode::PRECONDITION_REQUIRED,
            AppError::Kube(kube::Error::Api(resp)) => {
                StatusCode::from_u16(resp.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::Kube(_) | AppError::Io(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ResponseJson(json!({
            "error": error_message(&self)
        }));

        (status, body).into_response()
    }
}

/// Resolves the human-readable message shown to users for an error.
///
/// API server rejections carry their own message (e.g. an RBAC denial), which
/// is more useful than the wrapped display form.
pub fn error_message(err: &AppError) -> String {
    match err {
        AppError::Kube(kube::Error::Api(resp)) if !resp.message.is_empty() => resp.message.clone(),
        AppError::NotFound(msg)
        | AppError::BadRequest(msg)
        | AppError::Validation(msg)
        | AppError::Config(msg)
        | AppError::ConfirmationRequired(msg)
        | AppError::Internal(msg) => msg.clone(),
        other => other.to_string(),
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use kube::error::ErrorResponse;

    fn api_error(code: u16, message: &str) -> AppError {
        AppError::Kube(kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: message.to_string(),
            reason: "Forbidden".to_string(),
            code,
        }))
    }

    #[test]
    fn test_error_message_uses_api_server_message() {
        let err = api_error(403, "pipelineresources.tekton.dev is forbidden");
        assert_eq!(error_message(&err), "pipelineresources.tekton.dev is forbidden");
    }

    #[test]
    fn test_error_message_plain_variants() {
        assert_eq!(error_message(&AppError::NotFound("gone".to_string())), "gone");
        assert_eq!(error_message(&AppError::Validation("bad name".to_string())), "bad name");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ConfirmationRequired("confirm".to_string()).into_response().status(),
            StatusCode::PRECONDITION_REQUIRED
        );
        assert_eq!(
            AppError::Validation("x".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(api_error(403, "denied").into_response().status(), StatusCode::FORBIDDEN);
    }
}
