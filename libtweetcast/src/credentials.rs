//! Twitter OAuth 1.0a user-context credentials
//!
//! The four values are wrapped in [`SecretString`] so they are zeroed on drop
//! and never show up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};

/// Consumer key/secret plus access token/secret for one account
#[derive(Debug)]
pub struct TwitterCredentials {
    api_key: SecretString,
    api_key_secret: SecretString,
    access_token: SecretString,
    access_token_secret: SecretString,
}

impl TwitterCredentials {
    pub fn new(
        api_key: impl Into<String>,
        api_key_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_key_secret: SecretString::from(api_key_secret.into()),
            access_token: SecretString::from(access_token.into()),
            access_token_secret: SecretString::from(access_token_secret.into()),
        }
    }

    /// True when none of the four values is empty
    ///
    /// Incomplete credentials are still handed to the client, which reports
    /// the authentication failure itself.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the values that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("api_key", &self.api_key),
            ("api_key_secret", &self.api_key_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.expose_secret().trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub(crate) fn api_key_secret(&self) -> &str {
        self.api_key_secret.expose_secret()
    }

    pub(crate) fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    pub(crate) fn access_token_secret(&self) -> &str {
        self.access_token_secret.expose_secret()
    }
}
