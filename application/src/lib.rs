//! Application layer for llm-council
//!
//! This crate contains the submission controller, the port definitions it
//! drives, and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    council_gateway::{CouncilGateway, FailureKind, RequestFailure},
    view_observer::{NoObserver, ViewObserver},
};
pub use use_cases::council_controller::{CouncilController, SubmitOutcome};
