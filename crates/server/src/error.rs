use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_schema::ValidationError;

/// Request-level failure, mapped to the wire shape `{error, message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{context}: {message}")]
    Internal {
        context: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Wraps an unexpected failure with the route-specific `error` string.
    pub fn internal(context: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            context,
            message: cause.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Validation(e) => {
                (StatusCode::BAD_REQUEST, "Validation failed", e.message)
            }
            ApiError::Internal { context, message } => {
                tracing::error!(error = %message, "request failed");
                // The cause is passed through verbatim. This leaks internal
                // detail to clients; kept to match the documented contract.
                (StatusCode::INTERNAL_SERVER_ERROR, context, message)
            }
        };

        let body = serde_json::json!({ "error": error, "message": message });
        (status, Json(body)).into_response()
    }
}
