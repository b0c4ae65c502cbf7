//! Configuration management for Tweetcast
//!
//! Credentials come from an optional TOML file and from environment
//! variables, with the environment taking precedence:
//!
//! ```toml
//! [twitter]
//! api_key = "..."
//! api_key_secret = "..."
//! access_token = "..."
//! access_token_secret = "..."
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::credentials::TwitterCredentials;
use crate::error::{ConfigError, Result};

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "TWEETCAST_CONFIG";

pub const API_KEY_ENV: &str = "TWITTER_API_KEY";
pub const API_KEY_SECRET_ENV: &str = "TWITTER_API_KEY_SECRET";
pub const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET_ENV: &str = "ACCESS_TOKEN_SECRET";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub twitter: TwitterConfig,
}

#[derive(Clone, Default, Deserialize)]
pub struct TwitterConfig {
    pub api_key: Option<String>,
    pub api_key_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}

// Only report which values are present.
impl fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn presence(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("TwitterConfig")
            .field("api_key", &presence(&self.api_key))
            .field("api_key_secret", &presence(&self.api_key_secret))
            .field("access_token", &presence(&self.access_token))
            .field("access_token_secret", &presence(&self.access_token_secret))
            .finish()
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields an empty configuration.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using environment only");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Credentials with process environment overrides applied
    pub fn credentials(&self) -> TwitterCredentials {
        self.credentials_with(|name| std::env::var(name).ok())
    }

    /// Credentials with overrides taken from `lookup`
    ///
    /// Values absent from both sources become empty strings.
    pub fn credentials_with<F>(&self, lookup: F) -> TwitterCredentials
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |env: &str, file: &Option<String>| {
            lookup(env).or_else(|| file.clone()).unwrap_or_default()
        };

        let twitter = &self.twitter;
        TwitterCredentials::new(
            pick(API_KEY_ENV, &twitter.api_key),
            pick(API_KEY_SECRET_ENV, &twitter.api_key_secret),
            pick(ACCESS_TOKEN_ENV, &twitter.access_token),
            pick(ACCESS_TOKEN_SECRET_ENV, &twitter.access_token_secret),
        )
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("tweetcast").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TweetcastError;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_path_reads_twitter_section() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[twitter]
api_key = "file-key"
api_key_secret = "file-key-secret"
access_token = "file-token"
access_token_secret = "file-token-secret"
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.twitter.api_key.as_deref(), Some("file-key"));
        assert_eq!(
            config.twitter.access_token_secret.as_deref(),
            Some("file-token-secret")
        );

        let creds = config.credentials_with(|_| None);
        assert!(creds.is_complete());
        assert_eq!(creds.api_key(), "file-key");
    }

    #[test]
    fn test_load_from_path_allows_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.twitter.api_key.is_none());
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[twitter\napi_key = ");

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, TweetcastError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_path_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TweetcastError::Config(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = Config {
            twitter: TwitterConfig {
                api_key: Some("file-key".to_string()),
                api_key_secret: Some("file-key-secret".to_string()),
                access_token: None,
                access_token_secret: None,
            },
        };
        let env: HashMap<&str, &str> = [
            (API_KEY_ENV, "env-key"),
            (ACCESS_TOKEN_ENV, "env-token"),
        ]
        .into_iter()
        .collect();

        let creds = config.credentials_with(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(creds.api_key(), "env-key");
        assert_eq!(creds.api_key_secret(), "file-key-secret");
        assert_eq!(creds.access_token(), "env-token");
        assert_eq!(creds.access_token_secret(), "");
        assert_eq!(creds.missing_fields(), vec!["access_token_secret"]);
    }

    #[test]
    fn test_debug_does_not_leak_values() {
        let config = Config {
            twitter: TwitterConfig {
                api_key: Some("super-secret-key".to_string()),
                ..Default::default()
            },
        };
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<set>"));
        assert!(debug.contains("<unset>"));
    }

    #[test]
    #[serial]
    fn test_load_uses_config_env_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[twitter]\napi_key = \"from-env-path\"\n");
        std::env::set_var(CONFIG_PATH_ENV, &path);

        let config = Config::load().unwrap();
        assert_eq!(config.twitter.api_key.as_deref(), Some("from-env-path"));

        std::env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_PATH_ENV, dir.path().join("nope.toml"));

        let config = Config::load().unwrap();
        assert!(config.twitter.api_key.is_none());

        std::env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_credentials_are_a_snapshot_of_the_environment() {
        std::env::set_var(API_KEY_ENV, "startup-key");

        let creds = Config::default().credentials();
        std::env::set_var(API_KEY_ENV, "changed-later");

        assert_eq!(creds.api_key(), "startup-key");

        std::env::remove_var(API_KEY_ENV);
    }
}
