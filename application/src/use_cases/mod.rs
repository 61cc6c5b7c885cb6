//! Use cases (application services)

pub mod council_controller;
