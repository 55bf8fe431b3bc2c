//! Snapshot diff engine implementation.

use super::changes::{ComponentChangeComputer, VulnerabilityChangeComputer};
use super::traits::ChangeComputer;
use super::{DiffResult, MatchKey};
use crate::model::SnapshotContents;

/// Pure diff engine comparing the contents of two snapshots.
///
/// The engine never fails: empty or duplicate-laden inputs are legitimate
/// and produce a well-formed (possibly empty) result. It holds no state
/// between calls and is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    match_key: MatchKey,
    min_severity: Option<String>,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component identity key
    #[must_use]
    pub const fn with_match_key(mut self, match_key: MatchKey) -> Self {
        self.match_key = match_key;
        self
    }

    /// Only report new vulnerabilities at or above this severity
    #[must_use]
    pub fn with_min_severity(mut self, min_severity: Option<String>) -> Self {
        self.min_severity = min_severity;
        self
    }

    /// The configured identity key
    #[must_use]
    pub const fn match_key(&self) -> MatchKey {
        self.match_key
    }

    /// Compare two snapshots and return the diff result
    pub fn diff(&self, base: &SnapshotContents, target: &SnapshotContents) -> DiffResult {
        let comp_computer = ComponentChangeComputer::new(self.match_key);
        let component_changes = comp_computer.compute(&base.components, &target.components);

        let vuln_computer = VulnerabilityChangeComputer::new();
        let new_vulnerabilities =
            vuln_computer.compute(&base.vulnerabilities, &target.vulnerabilities);

        tracing::debug!(
            base_components = base.components.len(),
            target_components = target.components.len(),
            unchanged = component_changes.unchanged,
            match_key = %self.match_key,
            "components matched"
        );

        let mut result = DiffResult::assemble(component_changes, new_vulnerabilities);

        if let Some(ref min) = self.min_severity {
            let before = result.summary.new_vulnerabilities_count;
            result.filter_by_severity(min);
            tracing::debug!(
                min_severity = %min,
                dropped = before - result.summary.new_vulnerabilities_count,
                "filtered new vulnerabilities by severity"
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, VulnerabilityAssociation};

    fn contents(components: &[(&str, &str)], vulns: &[(&str, &str, &str, &str)]) -> SnapshotContents {
        SnapshotContents::new(
            components
                .iter()
                .map(|(n, v)| Component::new(*n, *v))
                .collect(),
            vulns
                .iter()
                .map(|(n, v, cve, sev)| VulnerabilityAssociation::new(*n, *v, *cve, *sev))
                .collect(),
        )
    }

    #[test]
    fn test_empty_diff() {
        let engine = DiffEngine::new();
        let empty = SnapshotContents::empty();
        let result = engine.diff(&empty, &empty);
        assert!(!result.has_changes());
    }

    #[test]
    fn test_identity() {
        let engine = DiffEngine::new();
        let snapshot = contents(
            &[("lodash", "4.17.15"), ("axios", "1.3.0")],
            &[("lodash", "4.17.15", "CVE-2020-8203", "HIGH")],
        );
        let result = engine.diff(&snapshot, &snapshot);

        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        assert!(result.updated.is_empty());
        assert!(result.new_vulnerabilities.is_empty());
    }

    #[test]
    fn test_min_severity_filter() {
        let engine = DiffEngine::new().with_min_severity(Some("high".to_string()));
        let base = SnapshotContents::empty();
        let target = contents(
            &[("axios", "1.4.0"), ("openssl", "3.0.1")],
            &[
                ("axios", "1.4.0", "CVE-2023-45857", "MEDIUM"),
                ("openssl", "3.0.1", "CVE-2022-3602", "HIGH"),
            ],
        );
        let result = engine.diff(&base, &target);

        assert_eq!(result.summary.new_vulnerabilities_count, 1);
        assert_eq!(result.new_vulnerabilities[0].cve_id, "CVE-2022-3602");
        assert_eq!(result.summary.added_count, 2);
    }

    #[test]
    fn test_engine_configuration() {
        let engine = DiffEngine::new().with_match_key(MatchKey::NameAndPurlType);
        assert_eq!(engine.match_key(), MatchKey::NameAndPurlType);
        assert_eq!(DiffEngine::new().match_key(), MatchKey::Name);
    }
}
