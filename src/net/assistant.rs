//! HTTP client for the remote assistant endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: the call fails with a transport
//! error, since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`AskError`]; nothing here panics. The
//! caller decides how failures surface (the widget shows one fallback
//! message for all of them).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use super::types::{AskError, AskRequest, AskResponse};

/// One request/response exchange with an assistant backend.
///
/// Futures are not `Send` because browser fetch futures are not.
#[async_trait::async_trait(?Send)]
pub trait AssistantClient: Send + Sync {
    /// Send `request` and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Returns an [`AskError`] if the transport fails, the endpoint responds
    /// with a non-success status, or the body carries no usable reply.
    async fn ask(&self, request: &AskRequest) -> Result<String, AskError>;
}

/// `POST`s JSON to a fixed endpoint URL.
#[derive(Clone, Debug)]
pub struct HttpAssistant {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    endpoint: String,
}

impl HttpAssistant {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl AssistantClient for HttpAssistant {
    async fn ask(&self, request: &AskRequest) -> Result<String, AskError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| AskError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AskError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AskError::Transport(e.to_string()))?;
            parse_reply(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AskError::Transport("not available on server".to_owned()))
        }
    }
}

/// Interpret a raw endpoint response.
///
/// A reply is usable only when the status is 2xx and the body is a JSON
/// object whose `text` field holds a non-blank string. Error bodies are
/// parsed best-effort for their `error` description.
///
/// # Errors
///
/// Returns [`AskError::Status`] for non-2xx statuses and
/// [`AskError::Malformed`] for 2xx responses without a usable reply.
pub fn parse_reply(status: u16, body: &str) -> Result<String, AskError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<AskResponse>(body).ok().and_then(|r| r.error);
        return Err(AskError::Status { status, message });
    }

    let parsed: AskResponse = serde_json::from_str(body).map_err(|e| AskError::Malformed(e.to_string()))?;
    match parsed.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(AskError::Malformed("empty text field".to_owned())),
        None => Err(AskError::Malformed("missing text field".to_owned())),
    }
}
