//! Interactive chat module
//!
//! Provides a line-editor based interactive loop for consulting the council.

mod repl;

pub use repl::ChatRepl;
