//! Error types for orchestrator operations.

use agent_tools::ToolError;
use brain_core::BrainError;
use thiserror::Error;

use crate::transcript::Message;

/// Errors that can occur during orchestration.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The inbound message was absent or empty.
    #[error("No message provided from frontend")]
    EmptyMessage,

    /// Model processing failed.
    #[error("brain error: {0}")]
    Brain(#[from] BrainError),

    /// A tool could not be constructed.
    #[error("tool setup failed: {0}")]
    Tool(#[from] ToolError),

    /// The detached turn task ended without reporting back.
    #[error("The request was interrupted before the agent could reply.")]
    Interrupted,
}

impl OrchestratorError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Brain(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// A turn that did not produce a model reply.
///
/// Carries the transcript as it stands after the error entry was appended,
/// so the caller can re-render the conversation.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct TurnFailure {
    pub error: OrchestratorError,
    pub history: Vec<Message>,
}
