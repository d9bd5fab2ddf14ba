//! Error types for model calls.

use thiserror::Error;

/// Errors that can occur while talking to a model provider.
#[derive(Debug, Error)]
pub enum BrainError {
    /// A required credential or setting is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be delivered (DNS, connect, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The provider did not answer within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The provider answered with a non-success status.
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider answered, but the payload was not what we expected.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl BrainError {
    /// The detail text without the category prefix, suitable for showing
    /// to the person on the other end of the chat.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(msg)
            | Self::Network(msg)
            | Self::Timeout(msg)
            | Self::InvalidResponse(msg) => msg.clone(),
            Self::Provider { message, .. } => message.clone(),
        }
    }

    /// Whether the failure happened in transport rather than at the provider.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}
