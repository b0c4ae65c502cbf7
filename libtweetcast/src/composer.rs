//! Interactive multi-line tweet composer
//!
//! The composer keeps a draft as a list of lines and reacts to each submitted
//! line. Three commands are recognized, and only when they make up the whole
//! trimmed line:
//!
//! - `/send` finishes the draft (ignored with a warning while it is blank)
//! - `/clear` empties the draft and keeps composing
//! - `/quit` aborts without sending, as does end-of-input (Ctrl+D)
//!
//! Anything else is appended verbatim, followed by a length report against
//! the soft limit. The limit is advisory only; nothing is truncated or refused.
//!
//! [`Composer::handle_line`] is the state machine on its own, and
//! [`Composer::run`] drives it over any `BufRead`/`Write` pair.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::message::Message;

/// Soft character limit used for length feedback
pub const TWEET_LIMIT: usize = 280;

const FIRST_PROMPT: &str = ">>> ";
const CONTINUATION_PROMPT: &str = "... ";

const BANNER: &str = "=== Tweet composer ===\n\
Type your tweet. Multi-line is allowed.\n\
Commands: /send, /clear, /quit\n\
(Ctrl+D also quits)\n";

/// A composer command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Send,
    Clear,
    Quit,
}

impl Command {
    /// Recognize a command when it is the entire trimmed line
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "/send" => Some(Command::Send),
            "/clear" => Some(Command::Clear),
            "/quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Why composing stopped without a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The user typed `/quit`
    Quit,
    /// The input stream ended
    EndOfInput,
}

/// Draft length measured against the soft limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthReport {
    pub length: usize,
    pub limit: usize,
}

impl LengthReport {
    pub fn is_over(&self) -> bool {
        self.length > self.limit
    }

    /// Characters left before the limit, zero once over it
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.length)
    }

    /// Characters past the limit, zero while within it
    pub fn over(&self) -> usize {
        self.length.saturating_sub(self.limit)
    }
}

impl fmt::Display for LengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_over() {
            write!(
                f,
                "[{} chars, {} over {} ⚠️]",
                self.length,
                self.over(),
                self.limit
            )
        } else {
            write!(f, "[{} chars, {} left]", self.length, self.remaining())
        }
    }
}

/// Feedback printed after a line that keeps the composer running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Cleared,
    NothingToSend,
    Length(LengthReport),
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Cleared => write!(f, "[cleared]"),
            Feedback::NothingToSend => write!(f, "⚠️  Nothing to send."),
            Feedback::Length(report) => fmt::Display::fmt(report, f),
        }
    }
}

/// Result of feeding one line to the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Feedback),
    Finished(Message),
    Aborted(AbortReason),
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    Finished(Message),
    Aborted(AbortReason),
}

#[derive(Debug, Clone)]
pub struct Composer {
    lines: Vec<String>,
    limit: usize,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            limit: TWEET_LIMIT,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The draft joined with newlines, untrimmed
    pub fn draft_text(&self) -> String {
        self.lines.join("\n")
    }

    /// `>>> ` while the draft is empty, `... ` once it has content
    pub fn prompt(&self) -> &'static str {
        if self.lines.is_empty() {
            FIRST_PROMPT
        } else {
            CONTINUATION_PROMPT
        }
    }

    /// Length report for the current draft
    pub fn length_report(&self) -> LengthReport {
        LengthReport {
            length: self.draft_text().chars().count(),
            limit: self.limit,
        }
    }

    /// Feed one submitted line (without its line terminator)
    pub fn handle_line(&mut self, line: &str) -> Step {
        match Command::parse(line) {
            Some(Command::Quit) => {
                self.lines.clear();
                Step::Aborted(AbortReason::Quit)
            }
            Some(Command::Clear) => {
                self.lines.clear();
                Step::Continue(Feedback::Cleared)
            }
            Some(Command::Send) => match Message::new(&self.draft_text()) {
                Ok(message) => {
                    self.lines.clear();
                    Step::Finished(message)
                }
                Err(_) => Step::Continue(Feedback::NothingToSend),
            },
            None => {
                self.lines.push(line.to_string());
                Step::Continue(Feedback::Length(self.length_report()))
            }
        }
    }

    /// The input stream ended; the draft is discarded
    pub fn handle_end_of_input(&mut self) -> Step {
        self.lines.clear();
        Step::Aborted(AbortReason::EndOfInput)
    }

    /// Run the interactive loop until the user sends or aborts
    ///
    /// Prompts and feedback are written to `output`. Read and write failures
    /// are returned as errors.
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, mut output: W) -> Result<ComposeOutcome> {
        writeln!(output, "{}", BANNER)?;

        loop {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            let step = match read_line(&mut input)? {
                Some(line) => self.handle_line(&line),
                None => {
                    // Keep "Aborted." off the prompt line
                    writeln!(output)?;
                    self.handle_end_of_input()
                }
            };

            match step {
                Step::Continue(feedback) => {
                    writeln!(output, "{}", feedback)?;
                }
                Step::Finished(message) => {
                    tracing::debug!(chars = message.char_count(), "Draft finished");
                    return Ok(ComposeOutcome::Finished(message));
                }
                Step::Aborted(reason) => {
                    tracing::debug!(?reason, "Composer aborted");
                    writeln!(output, "Aborted.")?;
                    return Ok(ComposeOutcome::Aborted(reason));
                }
            }
        }
    }
}

/// Read one line, stripping LF or CRLF. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}
