//! Prompt assembly for the stateless model.

use brain_core::ChatMessage;

use crate::formatting::search_note;
use crate::transcript::Message;

/// Context gathered for one turn before the model is called.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Rendered search block, if a search ran this turn.
    search_results: Option<String>,
}

impl Context {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the rendered search results.
    pub fn set_search_results(&mut self, results: impl Into<String>) {
        self.search_results = Some(results.into());
    }

    /// Check if the context has search results.
    pub fn has_search_results(&self) -> bool {
        self.search_results.is_some()
    }

    /// Build the prompt message list:
    /// system instruction, the history window, the optional search note,
    /// then the (possibly rewritten) question.
    pub fn build_messages(
        &self,
        system_prompt: &str,
        history: &[Message],
        question: &str,
    ) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 3);

        messages.push(ChatMessage::system(system_prompt));
        messages.extend(history.iter().map(Message::to_chat_message));

        if let Some(results) = &self.search_results {
            messages.push(ChatMessage::system(search_note(results)));
        }

        messages.push(ChatMessage::user(question));
        messages
    }
}
