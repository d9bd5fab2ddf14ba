//! Test doubles for the Dev Agent.
//!
//! This crate provides scripted implementations of the brain-core seams:
//! - `ScriptedModel` - a `ChatModel` that replays queued replies and records prompts
//! - `DelayedModel` - wraps another model with artificial latency
//! - `ScriptedSessionModel` - a `SessionModel` whose sessions replay queued replies
//! - `RecordingSearch` - a `SearchProvider` that records queries
//!
//! For real providers, use the `openrouter-brain`, `gemini-brain` and
//! `agent-tools` crates instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{ChatMessage, ChatModel, ScriptedModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let model = ScriptedModel::with_replies(["Hi there!"]);
//!
//!     let reply = model.complete(vec![ChatMessage::user("Hello!")]).await?;
//!     assert_eq!(reply, "Hi there!");
//!     assert_eq!(model.prompts()[0][0].content, "Hello!");
//!     Ok(())
//! }
//! ```

mod delayed;
mod scripted;
mod search;
mod session;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, BrainError, ChatMessage, ChatModel, ChatSession, ModelReply, SearchProvider,
    SessionInput, SessionModel, ToolInvocation,
};

pub use delayed::DelayedModel;
pub use scripted::ScriptedModel;
pub use search::RecordingSearch;
pub use session::ScriptedSessionModel;
