//! Chat-turn orchestration for the Dev Agent.
//!
//! This crate provides the [`Orchestrator`] type, which owns the transcript
//! and decides, for each user message, what happens before the model is
//! called.
//!
//! # Architecture
//!
//! ```text
//! User message (from the HTTP boundary)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Append user turn to the transcript                      │
//! │         ↓                                                   │
//! │  2. Classify (stateless variant):                           │
//! │     • calc:          → calculator, reply immediately        │
//! │     • study:         → rewrite as study-plan instruction    │
//! │     • web: / search: → search, answer-from-results prompt   │
//! │     • keyword match  → search with the raw message          │
//! │     • otherwise      → pass through                         │
//! │         ↓                                                   │
//! │  3. Build prompt: system, history window, search note, user │
//! │     (tool-calling variant: send to session, resolve calls)  │
//! │         ↓                                                   │
//! │  4. Append agent reply (or ⚠️ error entry)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::from_env()?;
//!
//!     match orchestrator.handle_turn("calc: 5*2+10").await {
//!         Ok(outcome) => println!("{}", outcome.reply),
//!         Err(failure) => eprintln!("turn failed: {}", failure),
//!     }
//!     Ok(())
//! }
//! ```

mod actions;
mod config;
mod context;
mod error;
mod formatting;
mod orchestrator;
mod router;
mod transcript;

// Public exports
pub use actions::{TurnAction, DEFAULT_STUDY_TOPIC};
pub use config::{AgentVariant, OrchestratorConfig, OrchestratorConfigBuilder};
pub use context::Context;
pub use error::{OrchestratorError, TurnFailure};
pub use formatting::{ERROR_MARKER, TOOL_ROUNDS_EXHAUSTED};
pub use orchestrator::{Orchestrator, TurnOutcome};
pub use router::{needs_web_search, route, AUTO_SEARCH_KEYWORDS};
pub use transcript::{Message, Sender, Transcript};
