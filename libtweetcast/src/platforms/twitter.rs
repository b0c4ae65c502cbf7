//! Twitter/X platform implementation
//!
//! Posts through egg-mode using OAuth 1.0a user-context tokens.

use async_trait::async_trait;
use egg_mode::tweet::DraftTweet;
use egg_mode::{KeyPair, Token};

use crate::composer::TWEET_LIMIT;
use crate::credentials::TwitterCredentials;
use crate::error::{PlatformError, Result};
use crate::message::Message;
use crate::platforms::Platform;

pub struct TwitterPlatform {
    token: Token,
    configured: bool,
}

impl TwitterPlatform {
    /// Build a client from the four OAuth values
    ///
    /// No network traffic happens here. Incomplete credentials are accepted
    /// and surface as an authentication failure on the first post.
    pub fn new(credentials: &TwitterCredentials) -> Self {
        let consumer = KeyPair::new(
            credentials.api_key().to_string(),
            credentials.api_key_secret().to_string(),
        );
        let access = KeyPair::new(
            credentials.access_token().to_string(),
            credentials.access_token_secret().to_string(),
        );

        Self {
            token: Token::Access { consumer, access },
            configured: credentials.is_complete(),
        }
    }
}

#[async_trait]
impl Platform for TwitterPlatform {
    async fn post(&self, message: &Message) -> Result<String> {
        let response = DraftTweet::new(message.as_str().to_string())
            .send(&self.token)
            .await
            .map_err(|e| map_egg_mode_error(e, "create tweet"))?;

        Ok(response.response.id.to_string())
    }

    fn name(&self) -> &str {
        "twitter"
    }

    fn character_limit(&self) -> Option<usize> {
        Some(TWEET_LIMIT)
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

fn map_egg_mode_error(error: egg_mode::error::Error, context: &str) -> PlatformError {
    use egg_mode::error::Error;

    match error {
        Error::RateLimit(reset) => PlatformError::RateLimit(format!(
            "Twitter rate limit exceeded ({}): resets at unix time {}",
            context, reset
        )),
        Error::NetError(e) => {
            PlatformError::Network(format!("Twitter request failed ({}): {}", context, e))
        }
        other => classify_error_text(&other.to_string(), context),
    }
}

/// Sort an error description by the HTTP status or Twitter error code it carries
fn classify_error_text(error_str: &str, context: &str) -> PlatformError {
    let codes = extract_twitter_codes(error_str);
    let has_code = |code: u32| codes.contains(&code);

    // 32: could not authenticate, 89: invalid token, 215: bad authentication data
    if has_code(32) || has_code(89) || has_code(215) || mentions_status(error_str, &[401, 403]) {
        return PlatformError::Authentication(format!(
            "Twitter authentication failed ({}): {}. \
             Suggestion: Check your API key and access token values.",
            context, error_str
        ));
    }

    // 186: too long, 187: duplicate status
    if has_code(186) || has_code(187) {
        return PlatformError::Validation(format!(
            "Twitter rejected the tweet ({}): {}",
            context, error_str
        ));
    }

    if has_code(88) || mentions_status(error_str, &[429]) {
        return PlatformError::RateLimit(format!(
            "Twitter rate limit exceeded ({}): {}",
            context, error_str
        ));
    }

    PlatformError::Posting(format!("Twitter posting failed ({}): {}", context, error_str))
}

/// Twitter error codes rendered as `#<code>` in egg-mode's error text
fn extract_twitter_codes(error_str: &str) -> Vec<u32> {
    error_str
        .split('#')
        .skip(1)
        .filter_map(|rest| {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        })
        .collect()
}

fn mentions_status(error_str: &str, statuses: &[u16]) -> bool {
    error_str
        .split(|c: char| !c.is_ascii_digit())
        .filter(|word| word.len() == 3)
        .filter_map(|word| word.parse::<u16>().ok())
        .any(|status| statuses.contains(&status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_metadata() {
        let creds = TwitterCredentials::new("key", "secret", "token", "token-secret");
        let platform = TwitterPlatform::new(&creds);

        assert_eq!(platform.name(), "twitter");
        assert_eq!(platform.character_limit(), Some(280));
        assert!(platform.is_configured());
    }

    #[test]
    fn test_incomplete_credentials_not_configured() {
        let creds = TwitterCredentials::new("key", "", "", "");
        let platform = TwitterPlatform::new(&creds);

        assert!(!platform.is_configured());
    }

    #[test]
    fn test_extract_twitter_codes() {
        let text = "Errors returned by Twitter: #187: Status is a duplicate. #32: Could not authenticate you.";
        assert_eq!(extract_twitter_codes(text), vec![187, 32]);
        assert!(extract_twitter_codes("no codes here").is_empty());
    }

    #[test]
    fn test_auth_codes_map_to_authentication() {
        let error = classify_error_text("Errors returned by Twitter: #89: Invalid or expired token.", "create tweet");
        match error {
            PlatformError::Authentication(msg) => {
                assert!(msg.contains("create tweet"));
                assert!(msg.contains("Suggestion"));
            }
            other => panic!("expected authentication error, got {:?}", other),
        }
    }

    #[test]
    fn test_unauthorized_status_maps_to_authentication() {
        let error = classify_error_text("Error status received: 401 Unauthorized", "create tweet");
        assert!(matches!(error, PlatformError::Authentication(_)));
    }

    #[test]
    fn test_duplicate_maps_to_validation() {
        let error = classify_error_text("Errors returned by Twitter: #187: Status is a duplicate.", "create tweet");
        assert!(matches!(error, PlatformError::Validation(_)));
    }

    #[test]
    fn test_too_many_requests_maps_to_rate_limit() {
        let error = classify_error_text("Error status received: 429 Too Many Requests", "create tweet");
        assert!(matches!(error, PlatformError::RateLimit(_)));
    }

    #[test]
    fn test_unknown_error_maps_to_posting() {
        let error = classify_error_text("Error status received: 500 Internal Server Error", "create tweet");
        match error {
            PlatformError::Posting(msg) => assert!(msg.contains("500")),
            other => panic!("expected posting error, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_limit_error_maps_to_rate_limit() {
        let error = map_egg_mode_error(egg_mode::error::Error::RateLimit(1_700_000_000), "create tweet");
        match error {
            PlatformError::RateLimit(msg) => {
                assert!(msg.contains("create tweet"));
                assert!(msg.contains("1700000000"));
            }
            other => panic!("expected rate limit error, got {:?}", other),
        }
    }
}
