use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lostfound_core::storage::{repository_error_to_status_code, RepositoryError};
use serde_json::json;

/// Application error type that wraps `anyhow::Error`.
///
/// Repository errors keep their mapped status code; anything else is a 500.
/// The body is always `{"error": "<message>"}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Status code this error renders with.
    pub fn status_code(&self) -> StatusCode {
        self.0
            .downcast_ref::<RepositoryError>()
            .map(|repo_error| {
                StatusCode::from_u16(repository_error_to_status_code(repo_error))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            })
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Error response for requests rejected before reaching storage.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, Json(json!({ "error": msg }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let error = AppError::from(RepositoryError::NotFound {
            entity_type: "Item",
            id: "3".to_string(),
        });
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_field_status() {
        let error = AppError::from(RepositoryError::MissingField("item_name"));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_connection_failed_status() {
        let error = AppError::from(RepositoryError::ConnectionFailed("gone".to_string()));
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
