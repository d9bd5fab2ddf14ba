//! OpenRouter request and response types.

use brain_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// Chat completion request to the OpenRouter API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model to use
    pub model: &'a str,
    /// Messages in the conversation
    pub messages: &'a [ChatMessage],
}

/// Chat completion response from the OpenRouter API.
///
/// Only the fields we read are modelled; everything is optional because
/// some upstream providers omit them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    /// Model that actually served the request
    #[serde(default)]
    pub model: Option<String>,
    /// Response choices
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice, if there is any text.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Finish reason of the first choice.
    pub fn finish_reason(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.finish_reason.as_deref())
    }
}

/// A response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The message
    #[serde(default)]
    pub message: Option<ResponseMessage>,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response message.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Content (may be null)
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_roles() {
        let messages = vec![ChatMessage::system("be kind"), ChatMessage::user("hi")];
        let request = ChatCompletionRequest {
            model: "meta-llama/llama-3.1-70b-instruct",
            messages: &messages,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "meta-llama/llama-3.1-70b-instruct");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_first_content_trims() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"model":"meta-llama/llama-3.1-70b-instruct","choices":[{"message":{"role":"assistant","content":"  Hello!\n"},"finish_reason":"stop"}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), Some("Hello!"));
        assert_eq!(response.finish_reason(), Some("stop"));
        assert_eq!(
            response.model.as_deref(),
            Some("meta-llama/llama-3.1-70b-instruct")
        );
    }

    #[test]
    fn test_first_content_missing() {
        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.first_content(), None);

        let blank: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert_eq!(blank.first_content(), None);

        let null: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(null.first_content(), None);

        let bare: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.first_content(), None);
        assert_eq!(bare.finish_reason(), None);
    }

    #[test]
    fn test_api_error_parse() {
        let err: ApiError =
            serde_json::from_str(r#"{"error":{"message":"No auth credentials found","code":401}}"#)
                .unwrap();
        assert_eq!(err.error.message.as_deref(), Some("No auth credentials found"));
    }
}
