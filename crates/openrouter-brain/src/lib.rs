//! OpenRouter-based chat model.
//!
//! This crate provides the stateless model client of the Dev Agent. Every
//! call sends the full prompt message list to OpenRouter's chat-completion
//! endpoint and returns the first choice's text.
//!
//! # Features
//!
//! - Fixed model identifier and identifying headers (`HTTP-Referer`, `X-Title`)
//! - Bounded request timeout with a single retry on transport failure
//! - Provider error messages surfaced verbatim
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use openrouter_brain::{ChatMessage, ChatModel, OpenRouterBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = OpenRouterBrain::from_env()?;
//!     let reply = brain
//!         .complete(vec![ChatMessage::user("Explain ownership in one line")])
//!         .await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::{OpenRouterBrain, EMPTY_REPLY_FALLBACK};
pub use config::{OpenRouterConfig, OpenRouterConfigBuilder, MISSING_KEY_MESSAGE};

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, BrainError, ChatMessage, ChatModel};
