//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use council_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of a council service running locally with its default settings
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/ask-council";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("endpoint url cannot be empty")]
    EmptyEndpoint,

    #[error("endpoint url is not a valid http(s) URL: {0}")]
    InvalidEndpoint(String),

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Council endpoint the prompt is POSTed to
    pub url: String,
    /// Timeout in seconds for the council request (absent = wait forever)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the deliberation spinner while a request is pending
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub endpoint: FileEndpointConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        match reqwest::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {}
            _ => return Err(ConfigValidationError::InvalidEndpoint(url.to_string())),
        }

        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }
}
