//! OpenRouterBrain implementation using the OpenRouter chat-completion API.

use brain_core::{async_trait, retry_once, BrainError, ChatMessage, ChatModel};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::{OpenRouterConfig, MISSING_KEY_MESSAGE};

/// Reply used when the provider answers without any text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response.";

/// A stateless chat model backed by OpenRouter.
///
/// OpenRouterBrain keeps no history: the orchestrator sends the complete
/// prompt (system instruction, history window, search note, user turn) on
/// every call.
pub struct OpenRouterBrain {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterBrain {
    /// Create a new OpenRouterBrain with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "OpenRouterBrain initialized with model: {}, key loaded: {}",
            config.model,
            config.api_key.is_some()
        );

        Ok(Self { client, config })
    }

    /// Create an OpenRouterBrain from environment variables.
    ///
    /// See [`OpenRouterConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(OpenRouterConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Make one chat completion request to the OpenRouter API.
    async fn chat_completion(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatCompletionResponse, BrainError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
        };

        debug!(
            "Sending {} message(s) to OpenRouter model {}",
            messages.len(),
            self.config.model
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            error!("OpenRouter error ({}): {}", status.as_u16(), body);

            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .and_then(|api_error| api_error.error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("OpenRouter request failed with {}", status.as_u16()));

            return Err(BrainError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BrainError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Classify a reqwest failure as timeout or plain network error.
fn transport_error(e: reqwest::Error) -> BrainError {
    if e.is_timeout() {
        BrainError::Timeout(format!("OpenRouter did not answer in time: {}", e))
    } else {
        BrainError::Network(format!("Failed to reach OpenRouter: {}", e))
    }
}

#[async_trait]
impl ChatModel for OpenRouterBrain {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| BrainError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

        let completion =
            retry_once("OpenRouter request", || self.chat_completion(api_key, &messages)).await?;

        debug!(
            "OpenRouter answered via {} (finish reason: {})",
            completion.model.as_deref().unwrap_or("unknown model"),
            completion.finish_reason().unwrap_or("none")
        );
        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        match completion.first_content() {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!("No content in OpenRouter response, using fallback");
                Ok(EMPTY_REPLY_FALLBACK.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "OpenRouterBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    /// What the fake provider saw and how it should answer.
    #[derive(Clone)]
    struct FakeProvider {
        status: StatusCode,
        body: String,
        delay: Duration,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<(HeaderMap, Value)>>>,
    }

    impl FakeProvider {
        fn answering(status: StatusCode, body: Value) -> Self {
            Self {
                status,
                body: body.to_string(),
                delay: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
            }
        }
    }

    async fn completions(
        State(fake): State<FakeProvider>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        fake.calls.fetch_add(1, Ordering::SeqCst);
        *fake.last_request.lock().unwrap() = Some((headers, body));
        tokio::time::sleep(fake.delay).await;
        (fake.status, fake.body.clone())
    }

    async fn spawn(fake: FakeProvider) -> String {
        let app = Router::new()
            .route("/api/v1/chat/completions", post(completions))
            .with_state(fake);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/v1", addr)
    }

    fn brain_for(url: &str) -> OpenRouterBrain {
        let config = OpenRouterConfig::builder()
            .api_key("sk-test")
            .api_url(url)
            .timeout(Duration::from_millis(300))
            .build();
        OpenRouterBrain::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_fails_fast() {
        let brain = OpenRouterBrain::new(OpenRouterConfig::default()).unwrap();
        let err = brain
            .complete(vec![ChatMessage::user("hello")])
            .await
            .unwrap_err();

        match err {
            BrainError::Configuration(msg) => assert_eq!(msg, MISSING_KEY_MESSAGE),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_sends_headers_and_messages() {
        let fake = FakeProvider::answering(
            StatusCode::OK,
            json!({
                "model": "meta-llama/llama-3.1-70b-instruct",
                "choices": [{"message": {"role": "assistant", "content": "  Hi there!  "}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
            }),
        );
        let url = spawn(fake.clone()).await;
        let brain = brain_for(&url);

        let reply = brain
            .complete(vec![ChatMessage::system("be nice"), ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi there!");

        let (headers, body) = fake.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(headers["authorization"], "Bearer sk-test");
        assert_eq!(headers["http-referer"], "https://myagent.example.com");
        assert_eq!(headers["x-title"], "Dev AI Agent");
        assert_eq!(body["model"], "meta-llama/llama-3.1-70b-instruct");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[tokio::test]
    async fn test_empty_choice_uses_fallback() {
        let fake = FakeProvider::answering(StatusCode::OK, json!({"choices": []}));
        let url = spawn(fake).await;

        let reply = brain_for(&url)
            .complete(vec![ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_provider_error_message_surfaced() {
        let fake = FakeProvider::answering(
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "No auth credentials found", "code": 401}}),
        );
        let url = spawn(fake.clone()).await;

        let err = brain_for(&url)
            .complete(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "No auth credentials found");
        assert!(matches!(err, BrainError::Provider { status: 401, .. }));
        // Status errors are not retried.
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_provider_error_without_message() {
        let fake = FakeProvider::answering(StatusCode::BAD_GATEWAY, json!({"oops": true}));
        let url = spawn(fake).await;

        let err = brain_for(&url)
            .complete(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "OpenRouter request failed with 502");
    }

    #[tokio::test]
    async fn test_timeout_retried_once() {
        let mut fake = FakeProvider::answering(StatusCode::OK, json!({"choices": []}));
        fake.delay = Duration::from_secs(2);
        let url = spawn(fake.clone()).await;

        let err = brain_for(&url)
            .complete(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, BrainError::Timeout(_)));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        // Bind and drop a listener to get a port with nothing behind it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = brain_for(&format!("http://{}/api/v1", addr))
            .complete(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
