//! Backend: wire types and transport for the knowledge-base bot.
//!
//! DESIGN
//! ======
//! The bot lives behind a single JSON endpoint. `ChatBackend` is the seam
//! the exchange coordinator talks to; `HttpBackend` is the real transport
//! and tests substitute their own implementation.
//!
//! Every failure keeps its cause in `BackendError` for logging, but the
//! conversation only ever sees one outcome: the fallback reply.

pub mod http;

use serde::{Deserialize, Serialize};

pub use http::HttpBackend;

pub const GET_RESPONSE_PATH: &str = "/get-response";
pub const ADD_QUESTION_PATH: &str = "/add-question";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, read).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}{}", body_excerpt(.body))]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The backend acknowledged the call but refused it.
    #[error("backend rejected request: {0}")]
    Rejected(String),
}

/// Longest slice of an error body carried into log lines.
const BODY_EXCERPT_CHARS: usize = 200;

/// `": <body>"` for log output, cut to [`BODY_EXCERPT_CHARS`] with control
/// characters replaced. Empty for a blank body.
fn body_excerpt(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    let mut excerpt: String = body
        .chars()
        .take(BODY_EXCERPT_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if body.chars().count() > BODY_EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    format!(": {excerpt}")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /get-response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Expected body of a successful `/get-response` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Body of `POST /add-question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachRequest<'a> {
    pub question: &'a str,
    pub response: &'a str,
}

/// Acknowledgement returned by `/add-question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachAck {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Parse a `/get-response` body. A missing or non-string `response` field
/// is a parse failure.
///
/// # Errors
///
/// Returns [`BackendError::Parse`] when the body does not match [`ChatReply`].
pub fn parse_chat_reply(body: &str) -> Result<String, BackendError> {
    serde_json::from_str::<ChatReply>(body)
        .map(|reply| reply.response)
        .map_err(|e| BackendError::Parse(e.to_string()))
}

/// Parse an `/add-question` body, turning a non-success status into an error.
///
/// # Errors
///
/// Returns [`BackendError::Parse`] for malformed bodies and
/// [`BackendError::Rejected`] when `status` is not `"success"`.
pub fn parse_teach_ack(body: &str) -> Result<TeachAck, BackendError> {
    let ack: TeachAck = serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    if ack.status != "success" {
        return Err(BackendError::Rejected(ack.message));
    }
    Ok(ack)
}

// =============================================================================
// CHAT BACKEND TRAIT
// =============================================================================

/// Async seam between the exchange coordinator and the bot. Enables stubbing in tests.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Ask the bot for a reply to `message`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails, the status is not
    /// 2xx, or the body lacks a string `response` field.
    async fn get_response(&self, message: &str) -> Result<String, BackendError>;
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
