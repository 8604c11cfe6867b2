//! Conversation state for one mounted chat widget.
//!
//! DESIGN
//! ======
//! `ChatState` is plain data plus the operations the widget exposes. The
//! component wraps it in a single `RwSignal`, so every operation below runs
//! inside one `update` and the view refreshes once per event.
//!
//! Submit is split in two halves around the network call:
//! [`ChatState::begin_submit`] applies the guard and the optimistic user
//! message, [`ChatState::finish_submit`] applies whatever the endpoint
//! produced. `loading` is the only thing that links them.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AskError, AskRequest};

/// Number of most recent messages sent to the endpoint as context.
pub const HISTORY_WINDOW: usize = 10;

/// Assistant message appended whenever a round-trip fails for any reason.
pub const FALLBACK_MESSAGE: &str = "Sorry — the assistant is having trouble right now. Try again in a moment.";

/// Speaker of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Open/closed, loading/idle, input text, and the append-only message log.
#[derive(Clone, Debug)]
pub struct ChatState {
    messages: Vec<Message>,
    pub input: String,
    pub loading: bool,
    pub open: bool,
}

impl ChatState {
    /// Fresh state seeded with one assistant greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self { messages: vec![Message::assistant(greeting)], input: String::new(), loading: false, open: false }
    }

    /// The message log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// True when a submit right now would actually send something.
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// The last [`HISTORY_WINDOW`] messages, oldest first.
    pub fn history(&self) -> &[Message] {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        &self.messages[start..]
    }

    /// Start a submit from the current input.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty or a request is already in flight. Otherwise appends the user
    /// message, clears the input, marks the state loading, and returns the
    /// request to send.
    pub fn begin_submit(&mut self) -> Option<AskRequest> {
        if !self.can_send() {
            return None;
        }

        let text = self.input.trim().to_owned();
        self.messages.push(Message::user(text.clone()));
        self.input.clear();
        self.loading = true;

        Some(AskRequest { message: text, history: self.history().to_vec() })
    }

    /// Apply the outcome of the in-flight request and return to idle.
    pub fn finish_submit(&mut self, result: Result<String, AskError>) {
        let reply = match result {
            Ok(text) => text,
            Err(e) => {
                leptos::logging::warn!("assistant request failed: {e}");
                FALLBACK_MESSAGE.to_owned()
            }
        };
        self.messages.push(Message::assistant(reply));
        self.loading = false;
    }
}
