//! Diff result structures.
//!
//! `DiffResult` is the wire contract returned to callers. It is produced
//! fresh for every request and never persisted.

use super::traits::ComponentChangeSet;
use crate::model::{severity_rank, Component};
use crate::utils::{content_hash, null_as_empty};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Complete result of a snapshot diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary counts
    #[serde(default)]
    pub summary: DiffSummary,
    /// Components only present in the target snapshot
    #[serde(default, deserialize_with = "null_as_empty")]
    pub added: Vec<ComponentEntry>,
    /// Components only present in the base snapshot
    #[serde(default, deserialize_with = "null_as_empty")]
    pub removed: Vec<ComponentEntry>,
    /// Components whose version changed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated: Vec<UpdatedComponent>,
    /// (component, CVE) pairs first observed in the target snapshot
    #[serde(default, deserialize_with = "null_as_empty")]
    pub new_vulnerabilities: Vec<NewVulnerability>,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose matcher and vulnerability-delta output into a result.
    ///
    /// Lists are put into canonical order here regardless of how the
    /// computers produced them, so the serialized form is reproducible.
    pub fn assemble(
        mut components: ComponentChangeSet,
        mut new_vulnerabilities: Vec<NewVulnerability>,
    ) -> Self {
        components.sort();
        new_vulnerabilities.sort_by(NewVulnerability::severity_order);

        let mut result = Self {
            summary: DiffSummary::default(),
            added: components.added,
            removed: components.removed,
            updated: components.updated,
            new_vulnerabilities,
        };
        result.calculate_summary();
        result
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        self.summary = DiffSummary {
            added_count: self.added.len(),
            removed_count: self.removed.len(),
            updated_count: self.updated.len(),
            new_vulnerabilities_count: self.new_vulnerabilities.len(),
        };
    }

    /// Check if there are any component changes or new vulnerabilities
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.component_changes() > 0 || self.summary.new_vulnerabilities_count > 0
    }

    /// Drop new vulnerabilities ranked below `min_severity`.
    ///
    /// Unrecognized severities rank lowest and are only kept when the
    /// threshold itself is unrecognized.
    pub fn filter_by_severity(&mut self, min_severity: &str) {
        let min_rank = severity_rank(min_severity);
        self.new_vulnerabilities
            .retain(|v| severity_rank(&v.severity) >= min_rank);
        self.calculate_summary();
    }

    /// Stable digest of the serialized result, suitable as a cache key.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        format!("{:016x}", content_hash(&bytes))
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added_count: usize,
    pub removed_count: usize,
    pub updated_count: usize,
    pub new_vulnerabilities_count: usize,
}

impl DiffSummary {
    /// Added + removed + updated
    #[must_use]
    pub const fn component_changes(&self) -> usize {
        self.added_count + self.removed_count + self.updated_count
    }
}

/// A component reported as added or removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub name: String,
    pub version: String,
    /// Empty string when the component carries no license
    #[serde(default)]
    pub license: String,
}

impl ComponentEntry {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            license: license.into(),
        }
    }
}

impl From<&Component> for ComponentEntry {
    fn from(component: &Component) -> Self {
        Self::new(
            component.name.clone(),
            component.version.clone(),
            component.license_or_empty(),
        )
    }
}

/// A component present on both sides with a different version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UpdatedComponent {
    pub name: String,
    pub old_version: String,
    pub new_version: String,
}

impl UpdatedComponent {
    pub fn new(
        name: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }
}

/// A vulnerability newly associated with a component in the target snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewVulnerability {
    pub cve_id: String,
    /// Component name
    pub component: String,
    /// Component version in the target snapshot
    pub version: String,
    /// Severity as stored on the target association
    pub severity: String,
}

impl NewVulnerability {
    pub fn new(
        cve_id: impl Into<String>,
        component: impl Into<String>,
        version: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            cve_id: cve_id.into(),
            component: component.into(),
            version: version.into(),
            severity: severity.into(),
        }
    }

    /// Most severe first, then CVE id, component and version ascending.
    #[must_use]
    pub fn severity_order(a: &Self, b: &Self) -> Ordering {
        severity_rank(&b.severity)
            .cmp(&severity_rank(&a.severity))
            .then_with(|| a.cve_id.cmp(&b.cve_id))
            .then_with(|| a.component.cmp(&b.component))
            .then_with(|| a.version.cmp(&b.version))
            .then_with(|| a.severity.cmp(&b.severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_changes() -> ComponentChangeSet {
        ComponentChangeSet {
            added: vec![
                ComponentEntry::new("react", "18.2.0", "MIT"),
                ComponentEntry::new("dayjs", "1.11.0", ""),
            ],
            removed: vec![ComponentEntry::new("moment", "2.29.4", "MIT")],
            updated: vec![UpdatedComponent::new("lodash", "4.17.15", "4.17.21")],
            unchanged: 3,
        }
    }

    #[test]
    fn test_assemble_counts_and_order() {
        let vulns = vec![
            NewVulnerability::new("CVE-2023-0002", "axios", "1.4.0", "MEDIUM"),
            NewVulnerability::new("CVE-2023-0001", "react", "18.2.0", "LOW"),
            NewVulnerability::new("CVE-2021-9999", "dayjs", "1.11.0", "CRITICAL"),
        ];
        let result = DiffResult::assemble(sample_changes(), vulns);

        assert_eq!(
            result.summary,
            DiffSummary {
                added_count: 2,
                removed_count: 1,
                updated_count: 1,
                new_vulnerabilities_count: 3,
            }
        );
        assert_eq!(result.added[0].name, "dayjs");
        let severities: Vec<_> = result
            .new_vulnerabilities
            .iter()
            .map(|v| v.severity.as_str())
            .collect();
        assert_eq!(severities, ["CRITICAL", "MEDIUM", "LOW"]);
        assert!(result.has_changes());
    }

    #[test]
    fn test_severity_order_tiebreak_on_cve() {
        let mut vulns = vec![
            NewVulnerability::new("CVE-2024-2", "a", "1", "HIGH"),
            NewVulnerability::new("CVE-2024-1", "b", "1", "high"),
            NewVulnerability::new("CVE-2020-1", "c", "1", "weird"),
        ];
        vulns.sort_by(NewVulnerability::severity_order);
        let ids: Vec<_> = vulns.iter().map(|v| v.cve_id.as_str()).collect();
        assert_eq!(ids, ["CVE-2024-1", "CVE-2024-2", "CVE-2020-1"]);
    }

    #[test]
    fn test_empty_result_serializes_arrays() {
        let result = DiffResult::assemble(ComponentChangeSet::new(), Vec::new());
        let json = serde_json::to_value(&result).unwrap();
        for field in ["added", "removed", "updated", "new_vulnerabilities"] {
            assert_eq!(json[field], serde_json::json!([]), "{field} should be []");
        }
        assert_eq!(json["summary"]["added_count"], 0);
        assert!(!result.has_changes());
    }

    #[test]
    fn test_null_lists_deserialize_as_empty() {
        let result: DiffResult = serde_json::from_str(
            r#"{"summary":{"added_count":0,"removed_count":0,"updated_count":0,"new_vulnerabilities_count":0},
                "added":null,"removed":[],"updated":null}"#,
        )
        .unwrap();
        assert!(result.added.is_empty());
        assert!(result.updated.is_empty());
        assert!(result.new_vulnerabilities.is_empty());
    }

    #[test]
    fn test_filter_by_severity_recomputes_summary() {
        let vulns = vec![
            NewVulnerability::new("CVE-1", "a", "1", "CRITICAL"),
            NewVulnerability::new("CVE-2", "b", "1", "LOW"),
            NewVulnerability::new("CVE-3", "c", "1", "HIGH"),
        ];
        let mut result = DiffResult::assemble(ComponentChangeSet::new(), vulns);
        result.filter_by_severity("high");

        assert_eq!(result.summary.new_vulnerabilities_count, 2);
        assert!(result.new_vulnerabilities.iter().all(|v| v.severity != "LOW"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = DiffResult::assemble(sample_changes(), Vec::new());
        let b = DiffResult::assemble(sample_changes(), Vec::new());
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 16);

        let empty = DiffResult::new();
        assert_ne!(a.fingerprint(), empty.fingerprint());
    }

    #[test]
    fn test_entry_from_component_without_license() {
        let entry = ComponentEntry::from(&Component::new("zlib", "1.3.1"));
        assert_eq!(entry, ComponentEntry::new("zlib", "1.3.1", ""));
    }
}
