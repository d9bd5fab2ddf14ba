//! Gemini sessions with client-side history and function calling.

use std::sync::Arc;

use brain_core::{
    async_trait, hash_prompt, retry_once, BrainError, ChatSession, ModelReply, SessionInput,
    SessionModel, ToolInvocation,
};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::api_types::{
    tool_catalog, GeminiContent, GeminiErrorBody, GeminiPart, GeminiRequest, GeminiResponse,
    GeminiSystemInstruction, GeminiTextPart,
};
use crate::config::{GeminiConfig, MISSING_KEY_MESSAGE};

/// Reply used when the model answers without any text or tool call.
const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response.";

/// Opens Gemini chat sessions that share one HTTP client.
pub struct GeminiSessionModel {
    client: Client,
    config: Arc<GeminiConfig>,
}

impl GeminiSessionModel {
    /// Create a new session model with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "GeminiSessionModel initialized with model: {}, key loaded: {}",
            config.model,
            config.api_key.is_some()
        );
        info!(
            "Gemini system prompt fingerprint: {}",
            hash_prompt(&config.system_prompt)
        );

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create a session model from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(GeminiConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl SessionModel for GeminiSessionModel {
    fn open_session(&self) -> Result<Box<dyn ChatSession>, BrainError> {
        let api_key = self
            .config
            .api_key
            .clone()
            .ok_or_else(|| BrainError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

        info!("Opening new Gemini session");

        Ok(Box::new(GeminiSession {
            client: self.client.clone(),
            config: Arc::clone(&self.config),
            api_key,
            contents: Vec::new(),
        }))
    }

    fn name(&self) -> &str {
        "GeminiSessionModel"
    }
}

/// One conversation with Gemini.
///
/// The API is stateless, so the session keeps every turn (user text, model
/// replies, function calls and function responses) and replays it on each
/// request.
pub struct GeminiSession {
    client: Client,
    config: Arc<GeminiConfig>,
    api_key: String,
    contents: Vec<GeminiContent>,
}

impl GeminiSession {
    /// Make one `generateContent` request with the current history.
    async fn generate_once(&self) -> Result<GeminiResponse, BrainError> {
        let request = GeminiRequest {
            contents: &self.contents,
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiTextPart {
                    text: self.config.system_prompt.clone(),
                }],
            },
            tools: tool_catalog(),
        };

        debug!(
            "Sending {} content(s) to Gemini model {}",
            self.contents.len(),
            self.config.model
        );

        let response = self
            .client
            .post(self.config.generate_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            error!("Gemini error ({}): {}", status.as_u16(), body);

            let message = serde_json::from_str::<GeminiErrorBody>(&body)
                .ok()
                .and_then(|body| body.error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("Gemini request failed with {}", status.as_u16()));

            return Err(BrainError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BrainError::InvalidResponse(format!("Failed to parse Gemini response: {}", e)))
    }

    /// Request a reply and turn the first candidate into model content.
    async fn generate(&self) -> Result<GeminiContent, BrainError> {
        let response = retry_once("Gemini request", || self.generate_once()).await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Token usage - prompt: {}, candidates: {}",
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0)
            );
        }

        let mut content = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .unwrap_or_else(|| GeminiContent {
                role: String::new(),
                parts: Vec::new(),
            });
        content.role = "model".to_string();
        Ok(content)
    }
}

/// Classify a reqwest failure as timeout or plain network error.
fn transport_error(e: reqwest::Error) -> BrainError {
    if e.is_timeout() {
        BrainError::Timeout(format!("Gemini did not answer in time: {}", e))
    } else {
        BrainError::Network(format!("Failed to reach Gemini: {}", e))
    }
}

#[async_trait]
impl ChatSession for GeminiSession {
    async fn send(&mut self, input: SessionInput) -> Result<ModelReply, BrainError> {
        let turn = match input {
            SessionInput::Text(text) => GeminiContent::user_text(text),
            SessionInput::ToolResult { call, result } => {
                GeminiContent::function_response(call.name(), result)
            }
        };
        self.contents.push(turn);

        let mut content = match self.generate().await {
            Ok(content) => content,
            Err(e) => {
                self.contents.pop();
                return Err(e);
            }
        };

        let call = content
            .function_call()
            .map(|call| ToolInvocation::from_call(&call.name, &call.args));

        let reply = match call {
            Some(call) => {
                info!("Gemini requested tool: {}", call.name());
                ModelReply::ToolCall(call)
            }
            None => {
                let text = content.text().trim().to_string();
                if text.is_empty() {
                    warn!("No content in Gemini response, using fallback");
                    content.parts = vec![GeminiPart::Text(GeminiTextPart {
                        text: EMPTY_REPLY_FALLBACK.to_string(),
                    })];
                    ModelReply::Text(EMPTY_REPLY_FALLBACK.to_string())
                } else {
                    ModelReply::Text(text)
                }
            }
        };

        self.contents.push(content);
        Ok(reply)
    }

    fn record_tool_result(&mut self, call: &ToolInvocation, result: &str) {
        self.contents
            .push(GeminiContent::function_response(call.name(), result));
    }

    fn turn_count(&self) -> usize {
        self.contents.len()
    }
}
