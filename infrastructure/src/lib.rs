//! Infrastructure layer for llm-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileOutputConfig,
    FileReplConfig, DEFAULT_ENDPOINT,
};
pub use http::HttpCouncilGateway;
