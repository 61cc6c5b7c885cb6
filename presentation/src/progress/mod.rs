//! Loading indicators driven by view changes

pub mod reporter;
