//! Terminal front end: argument parsing and the interactive chat loop.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::backend::{BackendError, HttpBackend};
use crate::config::ChatConfig;
use crate::exchange::{Exchange, ExchangeCoordinator};
use crate::render::{DEFAULT_WIDTH, Page, render_page};
use crate::state::{ConversationStore, Tab};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("nothing to send; the message is empty")]
    EmptyMessage,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("exchange task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Parser, Debug)]
#[command(name = "flexbot", about = "Terminal chat client for the Flexhack knowledge-base bot")]
pub struct Cli {
    /// Bot backend base URL. Defaults to `http://localhost:5000`.
    #[arg(long, env = "FLEXBOT_BASE_URL")]
    pub base_url: Option<String>,

    /// Page width used when drawing the conversation.
    #[arg(long, env = "FLEXBOT_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Send one message and print the bot's reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Add a question/answer pair to the bot's knowledge base.
    Teach {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },
}

/// A line typed into the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    CycleTab,
    Tab(Tab),
    UnknownTab(String),
    Text(String),
}

/// Classify one line of interactive input. Anything that is not a slash
/// command is chat text, passed through untrimmed.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed == "/quit" || trimmed == "/exit" {
        return Input::Quit;
    }
    if let Some(rest) = trimmed.strip_prefix("/tab") {
        if rest.is_empty() {
            return Input::CycleTab;
        }
        if rest.starts_with(char::is_whitespace) {
            let name = rest.trim();
            return Tab::parse(name).map_or_else(|| Input::UnknownTab(name.to_string()), Input::Tab);
        }
    }
    Input::Text(line.to_string())
}

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns a [`CliError`] if the HTTP client cannot be built, terminal I/O
/// fails, or a one-shot command fails.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ChatConfig::from_env();
    if let Some(url) = cli.base_url.as_deref() {
        config = config.with_base_url(url);
    }

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(&config, cli.width).await,
        Command::Ask { message } => run_ask(&config, &message.join(" ")).await,
        Command::Teach { question, answer } => run_teach(&config, &question, &answer).await,
    }
}

async fn run_ask(config: &ChatConfig, message: &str) -> Result<(), CliError> {
    let backend = Arc::new(HttpBackend::new(config)?);
    let mut coord = ExchangeCoordinator::new(ConversationStore::new(), backend);
    let exchange = coord.submit(message).ok_or(CliError::EmptyMessage)?;
    let reply = exchange.finished().await?;
    println!("{}", reply.text);
    Ok(())
}

async fn run_teach(config: &ChatConfig, question: &str, answer: &str) -> Result<(), CliError> {
    let backend = HttpBackend::new(config)?;
    let ack = backend.add_question(question, answer).await?;
    info!(%question, "knowledge base updated");
    println!("{}", ack.message);
    Ok(())
}

async fn run_chat(config: &ChatConfig, width: usize) -> Result<(), CliError> {
    let backend = Arc::new(HttpBackend::new(config)?);
    info!(base_url = backend.base_url(), "chat session started");

    let mut coord = ExchangeCoordinator::new(ConversationStore::with_greeting(), backend);
    let clear = io::stdout().is_terminal();
    let stdin = BufReader::new(tokio::io::stdin());
    chat_loop(&mut coord, stdin, &mut io::stdout(), width, clear).await
}

/// Drive an interactive session: read lines from `input`, redraw the page
/// into `out` after every line and every store change.
///
/// On EOF or `/quit` the loop stops reading but still waits for every
/// exchange it started, then draws the final page. In-flight requests are
/// never abandoned.
///
/// # Errors
///
/// Returns a [`CliError`] if reading input or writing the page fails, or if
/// an exchange task panicked.
pub async fn chat_loop<R, W>(
    coord: &mut ExchangeCoordinator,
    input: R,
    out: &mut W,
    width: usize,
    clear: bool,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut changed = coord.store().subscribe();
    let mut pending: Vec<Exchange> = Vec::new();

    draw(coord, out, width, clear)?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::CycleTab => {
                        let next = coord.tab().next();
                        coord.select_tab(next);
                    }
                    Input::Tab(tab) => coord.select_tab(tab),
                    Input::UnknownTab(name) => warn!(%name, "unknown tab"),
                    Input::Text(text) => {
                        coord.set_input(text);
                        if let Some(exchange) = coord.send_pending() {
                            pending.push(exchange);
                        }
                    }
                }
                pending.retain(|exchange| !exchange.is_finished());
                changed.mark_unchanged();
                draw(coord, out, width, clear)?;
            }
            res = changed.changed() => {
                if res.is_err() {
                    break;
                }
                changed.mark_unchanged();
                draw(coord, out, width, clear)?;
            }
        }
    }

    pending.retain(|exchange| !exchange.is_finished());
    if !pending.is_empty() {
        debug!(count = pending.len(), "waiting for in-flight replies");
        for exchange in pending {
            exchange.finished().await?;
        }
    }
    // A reply may have landed after the last draw.
    if changed.has_changed().unwrap_or(false) {
        draw(coord, out, width, clear)?;
    }
    Ok(())
}

fn draw(coord: &ExchangeCoordinator, out: &mut impl Write, width: usize, clear: bool) -> io::Result<()> {
    let messages = coord.store().snapshot();
    let page = Page { messages: &messages, tab: coord.tab(), input: coord.input(), width };
    if clear {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    write!(out, "{}", render_page(&page))?;
    out.flush()
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
