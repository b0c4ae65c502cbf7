//! Mock platform for tests
//!
//! Records every message it receives and can be told to fail, so the send
//! path and mode dispatch can be exercised without credentials or network.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{PlatformError, Result};
use crate::message::Message;
use crate::platforms::Platform;

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub name: String,

    /// Whether posting should succeed
    pub post_succeeds: bool,

    /// Error returned when posting fails
    pub post_error: Option<String>,

    pub character_limit: Option<usize>,

    pub is_configured: bool,

    /// Messages posted so far, shared across clones
    pub posted_content: Arc<Mutex<Vec<String>>>,

    /// Number of times post has been called, failures included
    pub post_attempts: Arc<AtomicUsize>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            post_succeeds: true,
            post_error: None,
            character_limit: None,
            is_configured: true,
            posted_content: Arc::new(Mutex::new(Vec::new())),
            post_attempts: Arc::new(AtomicUsize::new(0)),
        }
    }
}

pub struct MockPlatform {
    config: MockConfig,
}

impl MockPlatform {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// A mock platform that always succeeds
    pub fn success(name: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            ..Default::default()
        })
    }

    /// A mock platform whose posts fail with `error`
    pub fn post_failure(name: &str, error: &str) -> Self {
        Self::new(MockConfig {
            name: name.to_string(),
            post_succeeds: false,
            post_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Handle to the recorded messages that outlives the platform
    pub fn posted_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.config.posted_content)
    }

    /// Get all content that was posted
    pub fn posted_content(&self) -> Vec<String> {
        self.config
            .posted_content
            .lock()
            .map(|posted| posted.clone())
            .unwrap_or_default()
    }

    /// Handle to the attempt counter that outlives the platform
    pub fn attempts_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.config.post_attempts)
    }

    /// Get the number of times post was called, failed calls included
    pub fn post_call_count(&self) -> usize {
        self.config.post_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn post(&self, message: &Message) -> Result<String> {
        self.config.post_attempts.fetch_add(1, Ordering::SeqCst);

        if !self.config.post_succeeds {
            let error_msg = self
                .config
                .post_error
                .clone()
                .unwrap_or_else(|| "Mock posting failed".to_string());
            return Err(PlatformError::Posting(error_msg).into());
        }

        let mut posted = self
            .config
            .posted_content
            .lock()
            .map_err(|_| PlatformError::Posting("Mock state poisoned".to_string()))?;
        posted.push(message.as_str().to_string());

        Ok(format!("{}-{}", self.config.name, posted.len()))
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn character_limit(&self) -> Option<usize> {
        self.config.character_limit
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured
    }
}
