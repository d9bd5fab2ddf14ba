//! Core traits and types for the Dev Agent.
//!
//! This crate provides the shared interface between the model clients,
//! the local tools and the turn orchestrator. It defines:
//!
//! - [`ChatModel`] - stateless chat completion over a role-tagged message list
//! - [`SessionModel`] / [`ChatSession`] - a stateful, tool-calling conversation
//! - [`ToolInvocation`] - the closed set of tools a model may ask us to run
//! - [`SearchProvider`] - web search rendered to a prompt-ready text block
//! - [`BrainError`] - error type for every outbound model call
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, BrainError, ChatMessage, ChatModel};
//!
//! struct Parrot;
//!
//! #[async_trait]
//! impl ChatModel for Parrot {
//!     async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError> {
//!         Ok(messages.last().map(|m| m.content.clone()).unwrap_or_default())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Parrot"
//!     }
//! }
//! ```

mod error;
mod message;
mod model;
mod prompt;
mod retry;
mod tools;

pub use error::BrainError;
pub use message::{ChatMessage, Role};
pub use model::{ChatModel, ChatSession, ModelReply, SessionInput, SessionModel};
pub use prompt::{hash_prompt, prompt_from_env, DEFAULT_SYSTEM_PROMPT};
pub use retry::{retry_once, Retryable};
pub use tools::{SearchProvider, ToolInvocation, CALCULATE_TOOL, STUDY_PLAN_TOOL};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
