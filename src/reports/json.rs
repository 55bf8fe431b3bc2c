//! JSON report generator.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// Emits the diff result exactly as the HTTP response body.
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        _context: &ReportContext,
    ) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ComponentChangeSet, ComponentEntry, DiffResult};

    #[test]
    fn test_compact_json_contract() {
        let mut changes = ComponentChangeSet::new();
        changes.added.push(ComponentEntry::new("react", "18.2.0", ""));
        let result = DiffResult::assemble(changes, Vec::new());

        let json = JsonReporter::new()
            .pretty(false)
            .generate_diff_report(&result, &ReportContext::default())
            .unwrap();
        assert_eq!(
            json,
            r#"{"summary":{"added_count":1,"removed_count":0,"updated_count":0,"new_vulnerabilities_count":0},"added":[{"name":"react","version":"18.2.0","license":""}],"removed":[],"updated":[],"new_vulnerabilities":[]}"#
        );
    }
}
