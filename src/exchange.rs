//! Exchange coordinator: user submission → store update → bot reply.
//!
//! DESIGN
//! ======
//! `submit` appends the user's line synchronously, then spawns one task
//! that asks the backend for a reply. That task is the only writer of the
//! bot's answer: on success it appends the reply, on any failure it appends
//! the fixed fallback line.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping submissions are not serialized. Each task appends when its
//! own request completes, so replies land in completion order, which may
//! differ from send order. There are no retries and no cancellation:
//! dropping an `Exchange` detaches the task, it does not abort it.

use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::backend::ChatBackend;
use crate::message::Message;
use crate::state::{ConversationStore, Tab};

// =============================================================================
// EXCHANGE
// =============================================================================

/// Handle to one in-flight backend call.
pub struct Exchange {
    handle: JoinHandle<Message>,
}

impl Exchange {
    /// Wait for the call to resolve and return the bot message it appended.
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] if the exchange task panicked.
    pub async fn finished(self) -> Result<Message, JoinError> {
        self.handle.await
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

// =============================================================================
// COORDINATOR
// =============================================================================

/// Owns the pending input and the active tab, and drives exchanges
/// against a shared [`ConversationStore`].
pub struct ExchangeCoordinator {
    store: ConversationStore,
    backend: Arc<dyn ChatBackend>,
    input: String,
    tab: Tab,
}

impl ExchangeCoordinator {
    #[must_use]
    pub fn new(store: ConversationStore, backend: Arc<dyn ChatBackend>) -> Self {
        Self { store, backend, input: String::new(), tab: Tab::default() }
    }

    /// Read accessor for rendering layers.
    #[must_use]
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Submit whatever is in the pending-input field.
    pub fn send_pending(&mut self) -> Option<Exchange> {
        let text = self.input.clone();
        self.submit(&text)
    }

    /// Submit `text` to the bot.
    ///
    /// Whitespace-only input is ignored: nothing is appended, nothing is sent,
    /// and the pending input is left untouched. Otherwise the raw text is
    /// appended as a user message, the pending input is cleared, and one
    /// backend request is spawned on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn submit(&mut self, text: &str) -> Option<Exchange> {
        if text.trim().is_empty() {
            debug!("ignoring empty submission");
            return None;
        }

        self.store.append(Message::user(text));
        self.input.clear();

        let store = self.store.clone();
        let backend = Arc::clone(&self.backend);
        let message = text.to_string();
        debug!(len = message.len(), "sending message to bot");

        let handle = tokio::spawn(async move {
            let reply = match backend.get_response(&message).await {
                Ok(response) => Message::bot(response),
                Err(e) => {
                    warn!(error = %e, "bot reply unavailable");
                    Message::fallback()
                }
            };
            store.append(reply.clone());
            reply
        });

        Some(Exchange { handle })
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod tests;
