//! Presentation layer for llm-council
//!
//! This crate contains CLI definitions, the console renderer for the
//! council view, loading indicators, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{DeliberationSpinner, SimpleProgress};
