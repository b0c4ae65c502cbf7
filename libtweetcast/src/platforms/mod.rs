//! Platform abstraction and implementations
//!
//! A [`Platform`] takes a finished [`Message`] and publishes it in a single
//! call. Implementations do no retrying; whatever the remote side reports is
//! returned as a [`PlatformError`](crate::error::PlatformError).
//!
//! ```no_run
//! use libtweetcast::platforms::{twitter::TwitterPlatform, Platform};
//! use libtweetcast::{Message, TwitterCredentials};
//!
//! # async fn example() -> libtweetcast::Result<()> {
//! let creds = TwitterCredentials::new("key", "secret", "token", "token-secret");
//! let platform = TwitterPlatform::new(&creds);
//!
//! let id = platform.post(&Message::new("Hello from the terminal")?).await?;
//! println!("Posted: {}", id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::message::Message;

pub mod twitter;

// Available outside tests so integration tests can drive the app with it
pub mod mock;

#[async_trait]
pub trait Platform: Send + Sync {
    /// Publish `message` and return the platform-assigned post ID
    ///
    /// # Errors
    ///
    /// Any client failure (authentication, network, platform-side rejection)
    /// is returned as `TweetcastError::Platform`.
    async fn post(&self, message: &Message) -> Result<String>;

    /// Lowercase platform identifier (e.g. "twitter")
    fn name(&self) -> &str;

    /// Display limit used for composer feedback, or `None` if unbounded
    ///
    /// This is advisory. The remote side has the final say.
    fn character_limit(&self) -> Option<usize>;

    /// Whether all required credentials are present
    fn is_configured(&self) -> bool;
}
