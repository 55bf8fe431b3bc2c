//! Change computer implementations.
//!
//! This module provides concrete implementations of the `ChangeComputer` trait
//! for the two kinds of change a snapshot diff reports: component changes and
//! newly introduced vulnerabilities.

mod components;
mod vulnerabilities;

pub use components::ComponentChangeComputer;
pub use vulnerabilities::VulnerabilityChangeComputer;
