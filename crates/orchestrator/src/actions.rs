//! What a single chat turn should do before (or instead of) calling the model.

/// Topic used when `study:` has nothing after the colon.
pub const DEFAULT_STUDY_TOPIC: &str = "General topic";

/// The action chosen for one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// `calc:` - answer locally, no model call.
    Calculate { expr: String },

    /// `study:` - ask the model for a study plan, no search.
    StudyPlan { topic: String },

    /// `web:` / `search:` - search first, then ask the model to answer from
    /// the results.
    WebSearch { query: String },

    /// No prefix, but the message looks time-sensitive: search with the raw
    /// message and pass the message through unchanged.
    AutoSearch,

    /// Plain pass-through to the model.
    Plain,
}

impl TurnAction {
    /// Whether a web search runs before the model call.
    pub fn needs_search(&self) -> bool {
        matches!(self, Self::WebSearch { .. } | Self::AutoSearch)
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calculate { .. } => "calc",
            Self::StudyPlan { .. } => "study",
            Self::WebSearch { .. } => "web",
            Self::AutoSearch => "auto-search",
            Self::Plain => "plain",
        }
    }
}
