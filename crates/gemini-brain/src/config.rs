//! Configuration for GeminiSessionModel.

use brain_core::{prompt_from_env, DEFAULT_SYSTEM_PROMPT};
use std::env;
use std::time::Duration;

/// Returned as a configuration error when a session is opened without a key.
pub const MISSING_KEY_MESSAGE: &str =
    "GEMINI_API_KEY is not set on the server. Please add it to your .env file.";

/// Configuration for GeminiSessionModel.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL (without `/v1beta/...`).
    pub api_url: String,

    /// API key, sent as the `key` query parameter.
    pub api_key: Option<String>,

    /// Model name.
    pub model: String,

    /// System instruction attached to every request.
    pub system_prompt: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `GEMINI_API_KEY` - API key (sessions cannot be opened without it)
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.0-flash)
    /// - `GEMINI_SYSTEM_PROMPT` - System instruction override
    /// - `GEMINI_TIMEOUT_SECS` - Request timeout (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("GEMINI_API_URL").unwrap_or(defaults.api_url);

        let model = env::var("GEMINI_MODEL").unwrap_or(defaults.model);

        let system_prompt = prompt_from_env("GEMINI_SYSTEM_PROMPT", &defaults.system_prompt);

        let timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            api_key,
            model,
            system_prompt,
            timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Builder for GeminiConfig.
#[derive(Debug, Default)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system instruction.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}
