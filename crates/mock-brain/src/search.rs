//! Recording search provider.

use std::sync::Mutex;

use async_trait::async_trait;
use brain_core::SearchProvider;

use crate::scripted::lock;

/// A search provider that records queries and answers with canned text.
#[derive(Default)]
pub struct RecordingSearch {
    response: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl RecordingSearch {
    /// Answer every query with `Results for "{query}"`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every query with the same fixed text.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Every query received so far, oldest first.
    pub fn queries(&self) -> Vec<String> {
        lock(&self.queries).clone()
    }
}

#[async_trait]
impl SearchProvider for RecordingSearch {
    async fn search(&self, query: &str) -> String {
        lock(&self.queries).push(query.to_string());
        match &self.response {
            Some(text) => text.clone(),
            None => format!("Results for \"{}\"", query),
        }
    }

    fn name(&self) -> &str {
        "RecordingSearch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_queries() {
        let search = RecordingSearch::new();

        assert_eq!(search.search("rust").await, "Results for \"rust\"");
        assert_eq!(search.search("tokio").await, "Results for \"tokio\"");
        assert_eq!(search.queries(), vec!["rust", "tokio"]);
    }

    #[tokio::test]
    async fn test_fixed_response() {
        let search = RecordingSearch::with_response("(1) **Fixed**");
        assert_eq!(search.search("anything").await, "(1) **Fixed**");
        assert!(search.is_configured());
    }
}
