//! Prompt helpers: fingerprints for logs and env-var overrides.

use std::env;
use std::fmt::Write;

use sha2::{Digest, Sha256};
use tracing::info;

/// System instruction used by both model variants unless overridden.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a friendly and helpful AI assistant named DEV AI Agent. \
You can answer any kind of question: explanations, how-to help, coding, writing, general knowledge, etc. \
When you are given 'Web search results' from the system, use them as your main source for up-to-date facts, \
but still explain answers in your own words.";

/// Compute a stable SHA-256 fingerprint for a prompt string.
///
/// Logged at startup so a deployed prompt can be matched to a revision
/// without printing the prompt itself.
pub fn hash_prompt(prompt: &str) -> String {
    Sha256::digest(prompt.as_bytes())
        .iter()
        .fold(String::with_capacity(64), |mut hex, byte| {
            let _ = write!(hex, "{:02x}", byte);
            hex
        })
}

/// Read a prompt override from `var`, falling back to `default`.
///
/// Blank values are treated as unset.
pub fn prompt_from_env(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            info!("Using prompt override from {}", var);
            value.trim().to_string()
        }
        _ => default.to_string(),
    }
}
