//! Web search tool backed by SerpAPI.

use async_trait::async_trait;
use brain_core::{retry_once, SearchProvider};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::SearchConfig;
use crate::error::ToolError;

/// Result collections in the SerpAPI payload, in order of preference.
const RESULT_FIELDS: [&str; 4] = [
    "organic_results",
    "news_results",
    "answer_box",
    "knowledge_graph",
];

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchResultItem {
    /// Normalize a raw SerpAPI entry, walking each field's fallback chain.
    fn from_value(raw: &Value) -> Self {
        Self {
            title: first_text(raw, &["title", "name"]).unwrap_or_else(|| "No title".to_string()),
            snippet: first_text(raw, &["snippet", "content", "description", "answer"])
                .unwrap_or_else(|| "No snippet available.".to_string()),
            link: first_text(raw, &["link", "url", "source"]).unwrap_or_default(),
        }
    }
}

/// First non-empty string among `keys`.
fn first_text(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Pull up to `limit` items out of a SerpAPI response.
///
/// The first result collection present (and not null) wins, even when it
/// is empty. Single-object collections such as the answer box count as one
/// item.
pub fn extract_results(data: &Value, limit: usize) -> Vec<SearchResultItem> {
    let collection = RESULT_FIELDS
        .iter()
        .find_map(|field| data.get(*field).filter(|v| !v.is_null()));

    match collection {
        Some(Value::Array(items)) => items
            .iter()
            .take(limit)
            .map(SearchResultItem::from_value)
            .collect(),
        Some(single) if limit > 0 => vec![SearchResultItem::from_value(single)],
        _ => Vec::new(),
    }
}

/// Render items as the numbered block embedded into the model prompt.
pub fn render_results(query: &str, items: &[SearchResultItem]) -> String {
    let formatted = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("({}) **{}**\n{}\n{}", i + 1, item.title, item.snippet, item.link))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Top web results for \"{}\":\n\n{}", query, formatted)
}

/// Turn a failed search into the text the model will see instead.
fn describe_failure(query: &str, err: &ToolError) -> String {
    match err {
        ToolError::MissingCredential(_) => format!(
            "Error: SERPAPI_KEY is not set on the server. Cannot run web search for \"{}\".",
            query
        ),
        ToolError::Status(code) => {
            format!("Error: SerpAPI request failed with status {}.", code)
        }
        _ => format!("Error: Failed to fetch web results for \"{}\".", query),
    }
}

/// Google search through SerpAPI.
///
/// # Parameters sent
///
/// - `engine`, `q`, `api_key`, `num` as query-string parameters.
///
/// # Output
///
/// ```text
/// Top web results for "rust async":
///
/// (1) **Asynchronous Programming in Rust**
/// Getting started with async/.await ...
/// https://rust-lang.github.io/async-book/
/// ```
pub struct SerpApiSearch {
    client: Client,
    config: SearchConfig,
}

impl SerpApiSearch {
    /// Create a new search tool with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self, ToolError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        info!(
            "Web search (SerpAPI): {}",
            if config.api_key.is_some() { "Enabled" } else { "Disabled" }
        );

        Ok(Self { client, config })
    }

    /// Create a search tool from environment variables.
    ///
    /// See [`SearchConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ToolError> {
        Self::new(SearchConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a query and return the normalized items.
    pub async fn search_items(&self, query: &str) -> Result<Vec<SearchResultItem>, ToolError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ToolError::MissingCredential("SERPAPI_KEY".to_string()))?;

        let data = retry_once("SerpAPI search", || self.fetch(api_key, query)).await?;
        Ok(extract_results(&data, self.config.max_items))
    }

    /// Issue one GET against SerpAPI and parse the JSON body.
    async fn fetch(&self, api_key: &str, query: &str) -> Result<Value, ToolError> {
        debug!("Fetching web results for: {}", query);

        let num = self.config.num_results.to_string();
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("engine", self.config.engine.as_str()),
                ("q", query),
                ("api_key", api_key),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchProvider for SerpApiSearch {
    async fn search(&self, query: &str) -> String {
        match self.search_items(query).await {
            Ok(items) if items.is_empty() => {
                info!("No web results for: {}", query);
                format!("No web results found for: \"{}\".", query)
            }
            Ok(items) => {
                info!("Web search returned {} item(s) for: {}", items.len(), query);
                render_results(query, &items)
            }
            Err(e @ ToolError::MissingCredential(_)) | Err(e @ ToolError::Status(_)) => {
                warn!("Web search unavailable: {}", e);
                describe_failure(query, &e)
            }
            Err(e) => {
                error!("SerpAPI error: {}", e);
                describe_failure(query, &e)
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn name(&self) -> &str {
        "SerpAPI"
    }
}
