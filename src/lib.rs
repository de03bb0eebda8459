//! Flexbot: terminal chat client for the Flexhack knowledge-base bot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bot itself runs elsewhere behind a single JSON endpoint. This crate
//! keeps the conversation log, turns user submissions into backend calls,
//! folds the outcome back into the log, and draws the result as text.

pub mod backend;
pub mod cli;
pub mod config;
pub mod exchange;
pub mod message;
pub mod render;
pub mod state;
