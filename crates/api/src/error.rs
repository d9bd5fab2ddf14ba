//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::{OrchestratorError, TurnFailure};
use thiserror::Error;

/// Errors returned by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no usable `message`.
    #[error("No message provided from frontend")]
    MissingMessage,

    /// A chat turn failed after it was recorded.
    #[error("turn failed: {0}")]
    Turn(#[from] TurnFailure),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": ApiError::MissingMessage.to_string() }),
            ),
            ApiError::Turn(TurnFailure {
                error: error @ OrchestratorError::EmptyMessage,
                ..
            }) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": error.user_message() }),
            ),
            ApiError::Turn(failure) => {
                tracing::error!("Agent turn failed: {}", failure);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": failure.error.user_message(),
                        "history": failure.history,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
