//! Process-lifetime transcript of the conversation.

use brain_core::ChatMessage;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

/// One transcript entry, as the page renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sequence id, strictly increasing within a transcript.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// ISO-8601 UTC with millisecond precision.
    pub timestamp: String,
}

impl Message {
    /// Map onto a prompt message (`agent` becomes `assistant`).
    pub fn to_chat_message(&self) -> ChatMessage {
        match self.sender {
            Sender::User => ChatMessage::user(self.text.clone()),
            Sender::Agent => ChatMessage::assistant(self.text.clone()),
        }
    }
}

/// Ordered, append-only record of exchanged messages.
///
/// The only other mutation is [`Transcript::clear`], which also restarts
/// the id sequence.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// First id handed out after creation or a clear.
    pub const FIRST_ID: u64 = 1;

    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: Self::FIRST_ID,
        }
    }

    /// Append a message stamped with the next id and the current time.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        let message = Message {
            id: self.next_id,
            sender,
            text: text.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The last `size` messages (fewer if the transcript is shorter).
    pub fn window(&self, size: usize) -> &[Message] {
        &self.messages[self.messages.len().saturating_sub(size)..]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message and restart ids at [`Transcript::FIRST_ID`].
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = Self::FIRST_ID;
    }
}
