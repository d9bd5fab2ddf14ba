//! Tool calls and search support shared by models and the orchestrator.
//!
//! A tool-calling model never runs anything itself. It names a tool and
//! passes arguments; the orchestrator maps that onto a [`ToolInvocation`],
//! runs it locally and feeds the textual result back.

use async_trait::async_trait;
use serde_json::Value;

/// Declared name of the arithmetic tool.
pub const CALCULATE_TOOL: &str = "calculate";

/// Declared name of the study-plan tool.
pub const STUDY_PLAN_TOOL: &str = "generate_study_plan";

/// A tool call requested by a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInvocation {
    /// Evaluate an arithmetic expression.
    Calculate { expr: String },
    /// Produce a study plan for a topic.
    StudyPlan { topic: String },
    /// A name outside the declared catalog.
    Unknown { name: String },
}

impl ToolInvocation {
    /// Map a provider function call (name plus JSON arguments) onto the
    /// closed tool set. Missing arguments become empty strings so the tool
    /// itself can report the problem.
    pub fn from_call(name: &str, args: &Value) -> Self {
        let arg = |key: &str| {
            args.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        match name {
            CALCULATE_TOOL => Self::Calculate { expr: arg("expr") },
            STUDY_PLAN_TOOL => Self::StudyPlan { topic: arg("topic") },
            other => Self::Unknown {
                name: other.to_string(),
            },
        }
    }

    /// The tool name as the provider knows it.
    pub fn name(&self) -> &str {
        match self {
            Self::Calculate { .. } => CALCULATE_TOOL,
            Self::StudyPlan { .. } => STUDY_PLAN_TOOL,
            Self::Unknown { name } => name,
        }
    }
}

/// Web search that renders its findings as a prompt-ready text block.
///
/// Search never fails the turn: missing credentials, HTTP errors and empty
/// result sets all come back as explanatory text the model can still read.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a query and return the formatted results (or an explanation).
    async fn search(&self, query: &str) -> String;

    /// Whether credentials are present.
    fn is_configured(&self) -> bool {
        true
    }

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_call_calculate() {
        let call = ToolInvocation::from_call("calculate", &json!({"expr": "2 + 2"}));
        assert_eq!(
            call,
            ToolInvocation::Calculate {
                expr: "2 + 2".to_string()
            }
        );
        assert_eq!(call.name(), CALCULATE_TOOL);
    }

    #[test]
    fn test_from_call_study_plan() {
        let call = ToolInvocation::from_call("generate_study_plan", &json!({"topic": "Rust"}));
        assert_eq!(
            call,
            ToolInvocation::StudyPlan {
                topic: "Rust".to_string()
            }
        );
    }

    #[test]
    fn test_from_call_missing_argument() {
        let call = ToolInvocation::from_call("calculate", &json!({}));
        assert_eq!(call, ToolInvocation::Calculate { expr: String::new() });
    }

    #[test]
    fn test_from_call_unknown() {
        let call = ToolInvocation::from_call("launch_rockets", &json!({"count": 3}));
        assert_eq!(call.name(), "launch_rockets");
        assert!(matches!(call, ToolInvocation::Unknown { .. }));
    }
}
