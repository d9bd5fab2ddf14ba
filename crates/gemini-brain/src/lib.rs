//! Gemini-based tool-calling chat sessions.
//!
//! This crate provides the stateful model client of the Dev Agent. A
//! [`GeminiSessionModel`] opens [`GeminiSession`]s; each session carries the
//! system instruction, the declared tool catalog (`calculate`,
//! `generate_study_plan`) and the full conversation, and replays them on
//! every `generateContent` request.
//!
//! Tool calls requested by the model are handed back to the caller as
//! [`ModelReply::ToolCall`]; the caller resolves them and sends the result
//! with [`SessionInput::ToolResult`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_brain::{GeminiSessionModel, ModelReply, SessionInput, SessionModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = GeminiSessionModel::from_env()?;
//!     let mut session = model.open_session()?;
//!     match session.send(SessionInput::Text("what is 6*7?".into())).await? {
//!         ModelReply::Text(text) => println!("{}", text),
//!         ModelReply::ToolCall(call) => println!("model wants {}", call.name()),
//!     }
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod session;

pub use config::{GeminiConfig, GeminiConfigBuilder, MISSING_KEY_MESSAGE};
pub use session::{GeminiSession, GeminiSessionModel};

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, BrainError, ChatSession, ModelReply, SessionInput, SessionModel, ToolInvocation,
};
