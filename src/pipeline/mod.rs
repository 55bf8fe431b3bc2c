//! Request handling and output plumbing around the diff engine.

mod output;
mod request;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use request::{status, DiffRequest, DiffRequestHandler, DiffResponse, ErrorBody, DIFF_ROUTE};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or no failure flag set)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// Vulnerabilities were introduced
    pub const VULNS_INTRODUCED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
