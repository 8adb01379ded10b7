use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// URL of the LibreTranslate-compatible translate endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key, empty when the instance does not require one
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Language every chain starts from and returns to
    #[serde(default = "default_anchor_language")]
    pub anchor_language: String,

    /// Request timeout in seconds for each translation call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://translate.argosopentech.com/translate".to_string()
}

fn default_anchor_language() -> String {
    "ja".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.endpoint, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!(
                "Endpoint must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.anchor_language.trim().is_empty() {
            return Err(anyhow!("Anchor language must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("Timeout must be at least one second"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: default_endpoint(),
            api_key: String::new(),
            anchor_language: default_anchor_language(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}
