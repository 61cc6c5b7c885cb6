//! Domain layer for llm-council
//!
//! This crate contains the value objects and the view state of the council
//! client. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A remote council service consults several upstream models about a prompt
//! and returns two things:
//!
//! - **Individual responses**: one raw answer per consulted model
//! - **Council verdict**: a single aggregated answer, the primary result
//!
//! ## View
//!
//! [`CouncilView`] holds the transient state the client renders: the prompt
//! being edited, the latest responses and verdict, and the loading flag.
//! Every submission takes a new request generation so a late reply from an
//! older submission can never overwrite a newer one.

pub mod config;
pub mod core;
pub mod council;
pub mod view;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{error::DomainError, prompt::Prompt};
pub use council::{CouncilReply, ResponseItem, Verdict};
pub use view::{CouncilView, Phase};
