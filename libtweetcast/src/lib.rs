//! Tweetcast - compose and post tweets from the terminal
//!
//! This library provides the pieces behind the `tweet` command: an interactive
//! line composer with live length feedback, a platform abstraction for posting,
//! and the mode dispatch that ties them together.

pub mod app;
pub mod composer;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod message;
pub mod platforms;
pub mod poster;

// Re-export commonly used types
pub use composer::{ComposeOutcome, Composer, TWEET_LIMIT};
pub use config::Config;
pub use credentials::TwitterCredentials;
pub use error::{Result, TweetcastError};
pub use message::Message;
