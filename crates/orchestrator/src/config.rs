//! Configuration for the orchestrator.

use std::env;
use std::fmt;

use brain_core::{prompt_from_env, DEFAULT_SYSTEM_PROMPT};

/// Which model client drives the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentVariant {
    /// Stateless OpenRouter completions with local classification and search.
    #[default]
    OpenRouter,
    /// Gemini session with function calling.
    Gemini,
}

impl AgentVariant {
    /// Parse a variant name; anything unrecognised is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "openrouter" => Some(Self::OpenRouter),
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }
}

impl fmt::Display for AgentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenRouter => write!(f, "openrouter"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

/// Configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Model client to build in [`Orchestrator::from_env`](crate::Orchestrator::from_env).
    pub variant: AgentVariant,

    /// Number of trailing transcript messages included in each prompt.
    pub history_window: usize,

    /// Maximum tool results fed back to a session within one turn.
    pub max_tool_rounds: usize,

    /// System instruction for the stateless variant.
    pub system_prompt: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            variant: AgentVariant::default(),
            history_window: 10,
            max_tool_rounds: 5,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `AGENT_VARIANT` - `openrouter` or `gemini` (default: openrouter)
    /// - `AGENT_HISTORY_WINDOW` - Prompt history window (default: 10)
    /// - `AGENT_MAX_TOOL_ROUNDS` - Tool-call round cap (default: 5)
    /// - `AGENT_SYSTEM_PROMPT` - System instruction override
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let variant = env::var("AGENT_VARIANT")
            .ok()
            .and_then(|v| AgentVariant::parse(&v))
            .unwrap_or(defaults.variant);

        let history_window = env::var("AGENT_HISTORY_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.history_window);

        let max_tool_rounds = env::var("AGENT_MAX_TOOL_ROUNDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_tool_rounds);

        let system_prompt = prompt_from_env("AGENT_SYSTEM_PROMPT", &defaults.system_prompt);

        Self {
            variant,
            history_window,
            max_tool_rounds,
            system_prompt,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::default()
    }
}

/// Builder for OrchestratorConfig.
#[derive(Debug, Default)]
pub struct OrchestratorConfigBuilder {
    config: OrchestratorConfig,
}

impl OrchestratorConfigBuilder {
    /// Set the model variant.
    pub fn variant(mut self, variant: AgentVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Set the history window.
    pub fn history_window(mut self, size: usize) -> Self {
        self.config.history_window = size;
        self
    }

    /// Set the tool-call round cap.
    pub fn max_tool_rounds(mut self, rounds: usize) -> Self {
        self.config.max_tool_rounds = rounds;
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OrchestratorConfig {
        self.config
    }
}
