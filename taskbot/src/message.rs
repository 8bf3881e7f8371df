//! Chat messages and the append-only transcript.
//!
//! DESIGN
//! ======
//! The transcript only ever grows. Callers get shared slices back, so a message
//! cannot be edited once pushed, and order is always insertion order.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A labelled shortcut attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub label: String,
    pub action_id: String,
}

impl SuggestedAction {
    #[must_use]
    pub fn new(label: &str, action_id: &str) -> Self {
        Self { label: label.to_owned(), action_id: action_id.to_owned() }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    /// Rendered verbatim, embedded newlines included.
    pub content: String,
    pub created_at_ms: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<SuggestedAction>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: &str, created_at_ms: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            content: content.to_owned(),
            created_at_ms,
            suggested_actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn assistant(content: &str, suggested_actions: Vec<SuggestedAction>, created_at_ms: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Assistant,
            content: content.to_owned(),
            created_at_ms,
            suggested_actions,
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Ordered message history for one mounted widget.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
