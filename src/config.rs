use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the reader-API page fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Base URL of the content-extraction reader API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token for the reader API (optional; unauthenticated requests
    /// are allowed but may be rate limited by the service)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReaderConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default reader endpoint
fn default_endpoint() -> String {
    "https://r.jina.ai".to_string()
}

/// Default per-request timeout
fn default_timeout_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.endpoint, "https://r.jina.ai");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ReaderConfig::from_json(r#"{"api_key": "secret"}"#).unwrap();
        assert_eq!(config.endpoint, "https://r.jina.ai");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 60);

        let config =
            ReaderConfig::from_json(r#"{"endpoint": "https://reader.local", "timeout_secs": 5}"#)
                .unwrap();
        assert_eq!(config.endpoint, "https://reader.local");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 5);
    }
}
