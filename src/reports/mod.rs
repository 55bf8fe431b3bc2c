//! Report generation for diff results.
//!
//! - JSON: the HTTP response body, for programmatic integration
//! - Summary: compact shell-friendly output

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportContext, ReportFormat};

use crate::diff::DiffResult;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(ReportFormat),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        context: &ReportContext,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Build the generator for a resolved (non-`Auto`) format.
pub fn create_reporter(
    format: ReportFormat,
    colored: bool,
    pretty: bool,
) -> Result<Box<dyn ReportGenerator>, ReportError> {
    match format {
        ReportFormat::Json => Ok(Box::new(JsonReporter::new().pretty(pretty))),
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Ok(Box::new(if colored { reporter } else { reporter.no_color() }))
        }
        ReportFormat::Auto => Err(ReportError::UnsupportedFormat(format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter() {
        let json = create_reporter(ReportFormat::Json, false, true).unwrap();
        assert_eq!(json.format(), ReportFormat::Json);
        let summary = create_reporter(ReportFormat::Summary, true, true).unwrap();
        assert_eq!(summary.format(), ReportFormat::Summary);
        assert!(create_reporter(ReportFormat::Auto, true, true).is_err());
    }
}
