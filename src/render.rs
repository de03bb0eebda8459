//! Text renderer for the chat page.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of the message log, the active tab, and
//! the pending input. Nothing here touches the store; callers pass a
//! snapshot. The page is laid out top to bottom as header, tab strip,
//! message list, input line, footer.
//!
//! Bot rows hug the left edge and user rows hug the right edge. A bubble
//! never takes more than four fifths of the page width; longer text wraps
//! on word boundaries. Widths are terminal columns, not chars, so wide
//! CJK and emoji glyphs count double.
//!
//! Message text comes from the remote bot and is never written raw: control
//! characters are replaced before they reach the terminal.

use std::fmt::Write as _;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::message::{Message, Role};
use crate::state::Tab;

pub const DEFAULT_WIDTH: usize = 72;
pub const MIN_WIDTH: usize = 20;
pub const PLACEHOLDER: &str = "Please type your question here...";

const HEADER: &str = "Flexera  |  Flexbot";
const FOOTER: &str = "Enter to send  /tab <name> to switch  /quit to leave";

/// One visual row per message, keyed by its position in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: usize,
    pub role: Role,
    pub lines: Vec<String>,
}

/// Everything the page needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub messages: &'a [Message],
    pub tab: Tab,
    pub input: &'a str,
    pub width: usize,
}

/// Map each message to a wrapped row.
#[must_use]
pub fn rows(messages: &[Message], width: usize) -> Vec<Row> {
    let bubble = bubble_width(width);
    messages
        .iter()
        .enumerate()
        .map(|(key, msg)| Row { key, role: msg.role, lines: wrap(&msg.text, bubble) })
        .collect()
}

/// Draw the whole page.
#[must_use]
pub fn render_page(page: &Page<'_>) -> String {
    let width = page.width.max(MIN_WIDTH);
    let rule = "-".repeat(width);
    let mut out = String::new();

    let _ = writeln!(out, "{}", center(HEADER, width));
    let _ = writeln!(out, "{}", center(&tab_strip(page.tab), width));
    let _ = writeln!(out, "{rule}");

    for row in rows(page.messages, width) {
        for line in &row.lines {
            match row.role {
                Role::Bot => {
                    let _ = writeln!(out, "{line}");
                }
                Role::User => {
                    let pad = width.saturating_sub(line.width());
                    let _ = writeln!(out, "{}{line}", " ".repeat(pad));
                }
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{rule}");
    let shown = if page.input.is_empty() { PLACEHOLDER.to_string() } else { sanitize(page.input) };
    let _ = writeln!(out, "> {shown}");
    let _ = writeln!(out, "{}", center(FOOTER, width));
    out
}

/// Tab labels with the active one bracketed.
#[must_use]
pub fn tab_strip(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| if tab == active { format!("[{}]", tab.label()) } else { format!(" {} ", tab.label()) })
        .collect::<Vec<_>>()
        .join("  ")
}

fn bubble_width(width: usize) -> usize {
    (width.max(MIN_WIDTH) * 4 / 5).max(1)
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}").trim_end().to_string()
}

/// Replace control characters so remote text cannot drive the terminal.
fn sanitize(text: &str) -> String {
    text.chars().map(|c| if c.is_control() { char::REPLACEMENT_CHARACTER } else { c }).collect()
}

/// Greedy word wrap to `max` columns. Words wider than `max` are split
/// mid-word. Embedded newlines start a new line; other whitespace collapses
/// to single spaces. Always returns at least one line.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut cols = 0;
        for word in paragraph.split_whitespace() {
            let word = sanitize(word);
            let word_cols = word.width();

            if word_cols > max {
                if cols > 0 {
                    lines.push(std::mem::take(&mut line));
                    cols = 0;
                }
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if cols > 0 && cols + w > max {
                        lines.push(std::mem::take(&mut line));
                        cols = 0;
                    }
                    line.push(c);
                    cols += w;
                }
                continue;
            }

            let needed = if cols == 0 { word_cols } else { cols + 1 + word_cols };
            if needed > max {
                lines.push(std::mem::take(&mut line));
                cols = 0;
            }
            if cols > 0 {
                line.push(' ');
                cols += 1;
            }
            line.push_str(&word);
            cols += word_cols;
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
