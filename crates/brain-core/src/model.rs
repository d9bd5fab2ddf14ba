//! Model traits: stateless completion and stateful tool-calling sessions.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::message::ChatMessage;
use crate::tools::ToolInvocation;

/// A model that turns an ordered list of role-tagged messages into text.
///
/// Implementations carry no conversation state of their own; the caller
/// assembles the full prompt on every call.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a reply for the given prompt messages.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}

/// What the caller feeds into a [`ChatSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    /// A user turn.
    Text(String),
    /// The locally computed answer to a tool call the model asked for.
    ToolResult {
        call: ToolInvocation,
        result: String,
    },
}

/// What a [`ChatSession`] hands back after a request.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// Final text for the user.
    Text(String),
    /// The model wants a tool run before it answers.
    ToolCall(ToolInvocation),
}

/// A conversation whose history lives inside the session.
///
/// The session owns the system instruction, the declared tool catalog and
/// every exchanged turn. Tool calls are never resolved here: the caller
/// runs the tool and sends the result back with [`SessionInput::ToolResult`].
#[async_trait]
pub trait ChatSession: Send {
    /// Send one input and wait for the model's reply.
    async fn send(&mut self, input: SessionInput) -> Result<ModelReply, BrainError>;

    /// Append a tool result to the history without asking the model for a
    /// follow-up. Used when the caller answers the user directly.
    fn record_tool_result(&mut self, call: &ToolInvocation, result: &str);

    /// Number of entries in the session history.
    fn turn_count(&self) -> usize;
}

/// Factory for [`ChatSession`]s.
pub trait SessionModel: Send + Sync {
    /// Start a fresh session with an empty history.
    fn open_session(&self) -> Result<Box<dyn ChatSession>, BrainError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}
