//! Configuration for OpenRouterBrain.

use std::env;
use std::time::Duration;

/// Returned as a configuration error when a call is made without a key.
pub const MISSING_KEY_MESSAGE: &str =
    "OPENROUTER_KEY is not set on the server. Please add it to your .env file.";

/// Configuration for OpenRouterBrain.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// OpenRouter API base URL (without `/chat/completions`).
    pub api_url: String,

    /// API key. A missing key only fails once a completion is requested.
    pub api_key: Option<String>,

    /// Model identifier sent with every request.
    pub model: String,

    /// Value of the `HTTP-Referer` header.
    pub referer: String,

    /// Value of the `X-Title` header.
    pub title: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: None,
            model: "meta-llama/llama-3.1-70b-instruct".to_string(),
            referer: "https://myagent.example.com".to_string(),
            title: "Dev AI Agent".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl OpenRouterConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `OPENROUTER_KEY` - API key (calls fail with a configuration error without it)
    /// - `OPENROUTER_API_URL` - API URL (default: https://openrouter.ai/api/v1)
    /// - `OPENROUTER_MODEL` - Model name (default: meta-llama/llama-3.1-70b-instruct)
    /// - `OPENROUTER_REFERER` - `HTTP-Referer` header (default: https://myagent.example.com)
    /// - `OPENROUTER_TITLE` - `X-Title` header (default: Dev AI Agent)
    /// - `OPENROUTER_TIMEOUT_SECS` - Request timeout (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("OPENROUTER_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("OPENROUTER_API_URL").unwrap_or(defaults.api_url);

        let model = env::var("OPENROUTER_MODEL").unwrap_or(defaults.model);

        let referer = env::var("OPENROUTER_REFERER").unwrap_or(defaults.referer);

        let title = env::var("OPENROUTER_TITLE").unwrap_or(defaults.title);

        let timeout = env::var("OPENROUTER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            api_key,
            model,
            referer,
            title,
            timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::default()
    }

    /// Full chat-completion endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

/// Builder for OpenRouterConfig.
#[derive(Debug, Default)]
pub struct OpenRouterConfigBuilder {
    config: OpenRouterConfig,
}

impl OpenRouterConfigBuilder {
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

    /// Set the `HTTP-Referer` header value.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.config.referer = referer.into();
        self
    }

    /// Set the `X-Title` header value.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenRouterConfig {
        self.config
    }
}
