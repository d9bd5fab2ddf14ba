//! Configuration for the web search tool.

use std::env;
use std::time::Duration;

/// Default SerpAPI endpoint.
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Configuration for [`SerpApiSearch`](crate::SerpApiSearch).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// SerpAPI endpoint URL.
    pub api_url: String,

    /// API key. Without one, search answers with an explanation instead.
    pub api_key: Option<String>,

    /// Search engine requested from SerpAPI.
    pub engine: String,

    /// Result-count hint sent with the request.
    pub num_results: u32,

    /// Maximum number of items rendered into the result block.
    pub max_items: usize,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_SERPAPI_URL.to_string(),
            api_key: None,
            engine: "google".to_string(),
            num_results: 5,
            max_items: 3,
            timeout: Duration::from_secs(20),
        }
    }
}

impl SearchConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `SERPAPI_KEY` - API key (search is disabled without it)
    /// - `SERPAPI_URL` - Endpoint (default: https://serpapi.com/search.json)
    /// - `SERPAPI_ENGINE` - Engine (default: google)
    /// - `SERPAPI_NUM` - Result-count hint (default: 5)
    /// - `SERPAPI_TIMEOUT_SECS` - Request timeout (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("SERPAPI_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("SERPAPI_URL").unwrap_or(defaults.api_url);

        let engine = env::var("SERPAPI_ENGINE").unwrap_or(defaults.engine);

        let num_results = env::var("SERPAPI_NUM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.num_results);

        let timeout = env::var("SERPAPI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            api_key,
            engine,
            num_results,
            max_items: defaults.max_items,
            timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Builder for SearchConfig.
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the endpoint URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the result-count hint.
    pub fn num_results(mut self, num: u32) -> Self {
        self.config.num_results = num;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
