//! Scripted tool-calling sessions.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use brain_core::{BrainError, ChatSession, ModelReply, SessionInput, SessionModel, ToolInvocation};

use crate::scripted::lock;

/// A queued outcome for the next `send`.
enum Step {
    Reply(ModelReply),
    Fail(BrainError),
}

/// State shared by the model and every session it opened.
#[derive(Default)]
struct Shared {
    steps: Mutex<VecDeque<Step>>,
    inputs: Mutex<Vec<SessionInput>>,
    recorded: Mutex<Vec<(ToolInvocation, String)>>,
    opened: Mutex<usize>,
}

/// A session model whose sessions replay one shared script.
///
/// When the script runs out, sessions answer `ok`.
#[derive(Default)]
pub struct ScriptedSessionModel {
    shared: Arc<Shared>,
}

impl ScriptedSessionModel {
    /// Create a model with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text reply.
    pub fn push_text(&self, text: impl Into<String>) {
        lock(&self.shared.steps).push_back(Step::Reply(ModelReply::Text(text.into())));
    }

    /// Queue a tool call.
    pub fn push_tool_call(&self, call: ToolInvocation) {
        lock(&self.shared.steps).push_back(Step::Reply(ModelReply::ToolCall(call)));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: BrainError) {
        lock(&self.shared.steps).push_back(Step::Fail(error));
    }

    /// Every input sent to any session, oldest first.
    pub fn inputs(&self) -> Vec<SessionInput> {
        lock(&self.shared.inputs).clone()
    }

    /// Tool results recorded without a follow-up request.
    pub fn recorded_results(&self) -> Vec<(ToolInvocation, String)> {
        lock(&self.shared.recorded).clone()
    }

    /// Number of sessions opened so far.
    pub fn sessions_opened(&self) -> usize {
        *lock(&self.shared.opened)
    }
}

impl SessionModel for ScriptedSessionModel {
    fn open_session(&self) -> Result<Box<dyn ChatSession>, BrainError> {
        *lock(&self.shared.opened) += 1;
        Ok(Box::new(ScriptedSession {
            shared: Arc::clone(&self.shared),
            turns: 0,
        }))
    }

    fn name(&self) -> &str {
        "ScriptedSessionModel"
    }
}

struct ScriptedSession {
    shared: Arc<Shared>,
    turns: usize,
}

#[async_trait]
impl ChatSession for ScriptedSession {
    async fn send(&mut self, input: SessionInput) -> Result<ModelReply, BrainError> {
        lock(&self.shared.inputs).push(input);

        let step = lock(&self.shared.steps).pop_front();
        match step {
            Some(Step::Reply(reply)) => {
                self.turns += 2;
                Ok(reply)
            }
            Some(Step::Fail(error)) => Err(error),
            None => {
                self.turns += 2;
                Ok(ModelReply::Text("ok".to_string()))
            }
        }
    }

    fn record_tool_result(&mut self, call: &ToolInvocation, result: &str) {
        lock(&self.shared.recorded).push((call.clone(), result.to_string()));
        self.turns += 1;
    }

    fn turn_count(&self) -> usize {
        self.turns
    }
}
