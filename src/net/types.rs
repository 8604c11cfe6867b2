//! Wire types for the assistant endpoint.
//!
//! DESIGN
//! ======
//! The endpoint contract is small and opaque: one request shape, one reply
//! shape, and an optional error description. Every failure mode collapses
//! into [`AskError`] so the widget can treat them uniformly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::chat::Message;

/// Request body posted to the assistant endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The just-submitted user text, already trimmed.
    pub message: String,
    /// Most recent messages of the log, oldest first, ending with `message`.
    pub history: Vec<Message>,
}

/// Response body returned by the assistant endpoint.
///
/// Both fields are optional on the wire; [`super::assistant::parse_reply`]
/// decides whether the combination is usable.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors produced by a single assistant round-trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    /// The request never produced a response (network, DNS, CORS, abort).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned status {}{}", .status, status_detail(.message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// The endpoint answered 2xx but the body carried no usable reply.
    #[error("malformed response: {0}")]
    Malformed(String),
}

fn status_detail(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}
