//! Output formatting for the council view

pub mod console;
