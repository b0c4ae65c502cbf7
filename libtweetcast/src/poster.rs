//! Single-shot sending of a finished message

use crate::error::Result;
use crate::message::Message;
use crate::platforms::Platform;

/// Hand `message` to `platform` once and return the post ID
///
/// There is no retry. Failures come back as `TweetcastError::Platform` for the
/// caller to report.
pub async fn send(platform: &dyn Platform, message: &Message) -> Result<String> {
    let name = platform.name();

    if !platform.is_configured() {
        tracing::warn!(platform = name, "Credentials are incomplete; sending anyway");
    }

    if let Some(limit) = platform.character_limit() {
        let chars = message.char_count();
        if chars > limit {
            tracing::info!(platform = name, chars, limit, "Message is over the display limit");
        }
    }

    tracing::debug!(platform = name, chars = message.char_count(), "Posting message");

    match platform.post(message).await {
        Ok(post_id) => {
            tracing::info!(platform = name, post_id = %post_id, "Message posted");
            Ok(post_id)
        }
        Err(e) => {
            tracing::warn!(platform = name, error = %e, "Posting failed");
            Err(e)
        }
    }
}
