//! Chat message record shared by the store, the exchange, and the renderer.

use serde::{Deserialize, Serialize};

/// Opening line shown before the user has typed anything.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Bot line appended when a reply cannot be obtained for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error. Please try again later.";

/// Who authored a message. Only affects which side it renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single chat line. Immutable once appended to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub role: Role,
}

impl Message {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), role: Role::User }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), role: Role::Bot }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self::bot(FALLBACK_REPLY)
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
