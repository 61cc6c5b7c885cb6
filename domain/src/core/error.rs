//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Unknown output format: {0} (expected full, verdict or json)")]
    InvalidOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_display() {
        assert_eq!(DomainError::EmptyPrompt.to_string(), "Prompt cannot be empty");
    }

    #[test]
    fn test_invalid_output_format_display() {
        let error = DomainError::InvalidOutputFormat("yaml".to_string());
        assert!(error.to_string().contains("yaml"));
    }
}
