//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs.

mod diff;

pub use diff::run_diff;

pub use crate::config::DiffConfig;
