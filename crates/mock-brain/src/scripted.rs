//! Scripted chat model - replays queued replies and records every prompt.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use brain_core::{BrainError, ChatMessage, ChatModel};

/// A queued outcome for the next call.
enum Step {
    Reply(String),
    Fail(BrainError),
}

/// A chat model that answers from a queue.
///
/// When the queue is empty it echoes the last prompt message, so tests
/// that only care about the prompt do not need to script replies.
#[derive(Default)]
pub struct ScriptedModel {
    steps: Mutex<VecDeque<Step>>,
    prompts: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedModel {
    /// Create a model with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model that returns `replies` in order.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let model = Self::new();
        for reply in replies {
            model.push_reply(reply);
        }
        model
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, reply: impl Into<String>) {
        lock(&self.steps).push_back(Step::Reply(reply.into()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: BrainError) {
        lock(&self.steps).push_back(Step::Fail(error));
    }

    /// Every prompt received so far, oldest first.
    pub fn prompts(&self) -> Vec<Vec<ChatMessage>> {
        lock(&self.prompts).clone()
    }

    /// Number of completed calls.
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }
}

/// Lock a mutex, recovering the data if a panicking test poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError> {
        let echo = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        lock(&self.prompts).push(messages);

        let step = lock(&self.steps).pop_front();
        match step {
            Some(Step::Reply(text)) => Ok(text),
            Some(Step::Fail(error)) => Err(error),
            None => Ok(echo),
        }
    }

    fn name(&self) -> &str {
        "ScriptedModel"
    }
}
