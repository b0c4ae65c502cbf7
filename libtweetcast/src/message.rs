//! Finished tweet text

use std::fmt;

use crate::error::{Result, TweetcastError};

/// A finalized, non-empty tweet body
///
/// The only way to build one is through [`Message::new`], which trims the
/// text and refuses an empty result. Once built it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// Trim `text` and wrap it, rejecting whitespace-only input
    pub fn new(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TweetcastError::InvalidInput(
                "Content cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a message from command-line words joined by single spaces
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let joined = args
            .iter()
            .map(|arg| arg.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (Unicode scalar values), not bytes
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
