//! Council gateway port
//!
//! Defines the single outbound call to the council service.

use async_trait::async_trait;
use council_domain::{CouncilReply, Prompt};
use thiserror::Error;

/// What went wrong with a council request
///
/// Only used to make the diagnostic message precise. Callers treat every
/// kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, DNS failure, reset, ...
    Network,
    /// The endpoint answered with a non-success status
    Status(u16),
    /// The body was not a JSON council reply
    Decode,
    /// The configured timeout elapsed
    Timeout,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::Status(code) => write!(f, "HTTP {}", code),
            FailureKind::Decode => write!(f, "decode"),
            FailureKind::Timeout => write!(f, "timeout"),
        }
    }
}

/// A council request that did not produce a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Council request failed ({kind}): {message}")]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Status(code), message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Decode, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }
}

/// Gateway to the council service
///
/// Implementations (adapters) live in the infrastructure layer. One call to
/// [`consult`](CouncilGateway::consult) is exactly one outbound request: no
/// retries, no extra headers beyond the JSON content type.
#[async_trait]
pub trait CouncilGateway: Send + Sync {
    /// Submit a prompt and wait for the council's reply
    async fn consult(&self, prompt: &Prompt) -> Result<CouncilReply, RequestFailure>;

    /// Address the gateway posts to (for display and logs)
    fn endpoint(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_includes_kind() {
        let failure = RequestFailure::status(502, "Bad Gateway");
        assert_eq!(
            failure.to_string(),
            "Council request failed (HTTP 502): Bad Gateway"
        );
    }

    #[test]
    fn test_failure_constructors() {
        assert_eq!(RequestFailure::network("x").kind, FailureKind::Network);
        assert_eq!(RequestFailure::decode("x").kind, FailureKind::Decode);
        assert_eq!(RequestFailure::timeout("x").kind, FailureKind::Timeout);
    }
}
