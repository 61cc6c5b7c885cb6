//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a settled council view is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Verdict card followed by every individual response (default)
    #[default]
    Full,
    /// Only the council verdict
    Verdict,
    /// The reply body as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "verdict" => Ok(Self::Verdict),
            "json" => Ok(Self::Json),
            other => Err(DomainError::InvalidOutputFormat(other.to_string())),
        }
    }
}
