// Re-export modules
pub mod config;
pub mod fetcher;
pub mod normalize;
pub mod records;
pub mod scanner;
pub mod tables;
pub mod tokenize;

// Re-export commonly used types for convenience
pub use records::{KeywordTarget, MatchRecord, PageRecord};

use std::path::Path;
use tokio::sync::mpsc;

/// Builder for streaming fetched pages out of the reader API
pub struct Audit {
    urls: Vec<String>,
    config: config::ReaderConfig,
}

impl Audit {
    /// Create a new Audit builder over the given site URLs
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            config: config::ReaderConfig::default(),
        }
    }

    /// Apply a fetcher configuration
    pub fn with_config(mut self, config: config::ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Load fetcher configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = config::ReaderConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the reader API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the reader API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Start fetching and get a receiver yielding one PageRecord per URL,
    /// in input order
    pub async fn generate(self) -> mpsc::Receiver<PageRecord> {
        fetcher::start(&self.config, self.urls).await
    }
}
