//! Gemini `generateContent` request and response types.

use brain_core::{CALCULATE_TOOL, STUDY_PLAN_TOOL};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
pub struct GeminiRequest<'a> {
    pub contents: &'a [GeminiContent],
    #[serde(rename = "systemInstruction")]
    pub system_instruction: GeminiSystemInstruction,
    pub tools: Vec<GeminiTool>,
}

#[derive(Debug, Serialize)]
pub struct GeminiSystemInstruction {
    pub parts: Vec<GeminiTextPart>,
}

/// One turn of the conversation, as Gemini stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![GeminiPart::Text(GeminiTextPart { text: text.into() })],
        }
    }

    pub fn function_response(name: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![GeminiPart::FunctionResponse(GeminiFunctionResponsePart {
                function_response: GeminiFunctionResponse {
                    name: name.into(),
                    response: json!({ "result": result.into() }),
                },
            })],
        }
    }

    /// First function call among the parts, if any.
    pub fn function_call(&self) -> Option<&GeminiFunctionCall> {
        self.parts.iter().find_map(|part| match part {
            GeminiPart::FunctionCall(call) => Some(&call.function_call),
            _ => None,
        })
    }

    /// All text parts joined together.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                GeminiPart::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Part can be text, function call, or function response.
///
/// Parts we do not model are kept as raw JSON so they can be replayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    Text(GeminiTextPart),
    FunctionCall(GeminiFunctionCallPart),
    FunctionResponse(GeminiFunctionResponsePart),
    Other(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiTextPart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiFunctionCallPart {
    #[serde(rename = "functionCall")]
    pub function_call: GeminiFunctionCall,
    #[serde(rename = "thoughtSignature", skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiFunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiFunctionResponsePart {
    #[serde(rename = "functionResponse")]
    pub function_response: GeminiFunctionResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiFunctionResponse {
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Serialize)]
pub struct GeminiTool {
    #[serde(rename = "functionDeclarations")]
    pub function_declarations: Vec<GeminiFunctionDeclaration>,
}

#[derive(Debug, Serialize)]
pub struct GeminiFunctionDeclaration {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

/// The two tools every session declares.
pub fn tool_catalog() -> Vec<GeminiTool> {
    vec![GeminiTool {
        function_declarations: vec![
            GeminiFunctionDeclaration {
                name: CALCULATE_TOOL,
                description: "Evaluate an arithmetic expression and return the numeric result.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "expr": {
                            "type": "string",
                            "description": "Arithmetic expression, e.g. (5*2)+10"
                        }
                    },
                    "required": ["expr"]
                }),
            },
            GeminiFunctionDeclaration {
                name: STUDY_PLAN_TOOL,
                description: "Create a beginner-friendly 5-day study plan for a topic.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "topic": {
                            "type": "string",
                            "description": "Topic to study"
                        }
                    },
                    "required": ["topic"]
                }),
            },
        ],
    }]
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata", default)]
    pub usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: Option<u32>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct GeminiErrorBody {
    pub error: GeminiError,
}

#[derive(Debug, Deserialize)]
pub struct GeminiError {
    #[serde(default)]
    pub message: Option<String>,
}
