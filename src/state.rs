//! Shared chat state.
//!
//! DESIGN
//! ======
//! `ConversationStore` is the in-memory log of messages for one session.
//! It is cloned into every exchange task; all clones share the same log.
//! Appends are the only mutation. Each append bumps a `watch` channel
//! carrying the new length so a front end can redraw without polling.
//!
//! The lock is a plain `std::sync::Mutex` held only for a push or a read,
//! never across an await point.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::message::{GREETING, Message};

// =============================================================================
// CONVERSATION STORE
// =============================================================================

/// Ordered, append-only log of chat messages.
#[derive(Clone)]
pub struct ConversationStore {
    messages: Arc<Mutex<Vec<Message>>>,
    changed: Arc<watch::Sender<usize>>,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        let (changed, _) = watch::channel(0);
        Self { messages: Arc::new(Mutex::new(Vec::new())), changed: Arc::new(changed) }
    }

    /// A store seeded with the bot's opening line.
    #[must_use]
    pub fn with_greeting() -> Self {
        let store = Self::new();
        store.append(Message::bot(GREETING));
        store
    }

    /// Add a message to the end of the log and notify subscribers.
    pub fn append(&self, message: Message) {
        let len = {
            let mut messages = self.lock();
            messages.push(message);
            messages.len()
        };
        self.changed.send_replace(len);
    }

    /// Copy of the current log, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Message> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<Message> {
        self.lock().last().cloned()
    }

    /// Receiver that observes the log length after every append.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.changed.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        // A panic mid-push cannot leave a half-written Vec, so poison is ignored.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TABS
// =============================================================================

/// Display tabs above the chat. Selection only changes the highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Flexhack,
    Flexera,
    Gemini,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Flexhack, Tab::Flexera, Tab::Gemini];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flexhack => "Flexhack",
            Self::Flexera => "Flexera",
            Self::Gemini => "Gemini",
        }
    }

    /// Case-insensitive lookup by label.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|tab| tab.label().eq_ignore_ascii_case(raw))
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Flexhack => Self::Flexera,
            Self::Flexera => Self::Gemini,
            Self::Gemini => Self::Flexhack,
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
