//! Ordered conversation state.
//!
//! A `Transcript` is seeded with one message (the system prompt in session
//! mode) and then only grows by appending. `clear` truncates back to the seed.

use serde::Serialize;

use crate::types::Message;

/// Ordered, append-only conversation with a fixed seed at index 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a conversation with a single system message.
    pub fn create(system_prompt: impl Into<String>) -> Self {
        Self::seeded(Message::system(system_prompt))
    }

    /// Start a conversation with an arbitrary seed message.
    pub fn seeded(seed: Message) -> Self {
        Self {
            messages: vec![seed],
        }
    }

    /// Append a user turn. Empty text is allowed.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Append an assistant turn.
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Drop every turn after the seed.
    pub fn clear(&mut self) {
        self.messages.truncate(1);
    }

    /// All messages in conversation order, seed first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
