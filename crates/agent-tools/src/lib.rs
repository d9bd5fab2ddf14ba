//! Local tools for the Dev Agent.
//!
//! Both tools answer with plain text and never fail the caller: problems
//! come back as fixed, human-readable strings that can be shown to the
//! user or embedded into a model prompt.
//!
//! - [`Calculator`] - arithmetic over a closed grammar, evaluated with `meval`.
//! - [`SerpApiSearch`] - Google results via SerpAPI, rendered as a numbered block.
//!
//! # Example
//!
//! ```rust
//! use agent_tools::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.evaluate("5*2+10"), "20");
//! assert_eq!(calc.evaluate("process.exit()"), "Error: Invalid mathematical expression.");
//! ```

mod config;
mod error;
pub mod tools;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::ToolError;
pub use tools::{
    extract_results, render_results, Calculator, SearchResultItem, SerpApiSearch,
    INVALID_EXPRESSION,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
