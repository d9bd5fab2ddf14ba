//! Error types for tool operations.

use brain_core::Retryable;
use thiserror::Error;

/// Errors that can occur inside a tool before it is rendered to text.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A credential the tool needs is not configured.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Expression rejected or evaluation failed (calculator).
    #[error("Evaluation error: {0}")]
    EvalError(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Retryable for ToolError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => !e.is_decode() && !e.is_status(),
            _ => false,
        }
    }
}
