//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::Prompt`] — a validated prompt to submit to the council
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod prompt;
pub mod string;
