//! Vulnerability associations and severity ranking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Map a severity string to a numeric rank for comparison.
///
/// Higher values indicate more severe vulnerabilities.
/// Returns 0 for unrecognized severity strings.
#[must_use]
pub fn severity_rank(s: &str) -> u8 {
    match s.trim().to_lowercase().as_str() {
        "critical" => 4,
        "high" => 3,
        "medium" => 2,
        "low" => 1,
        _ => 0,
    }
}

/// Link between a component and a vulnerability record inside one snapshot.
///
/// Associations are compared across snapshots by component *name*, because
/// the component row behind them changes whenever the version does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityAssociation {
    pub component_name: String,
    #[serde(default)]
    pub component_version: String,
    pub cve_id: String,
    /// Severity exactly as stored (e.g. `HIGH`)
    #[serde(default)]
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_at: Option<DateTime<Utc>>,
}

impl VulnerabilityAssociation {
    pub fn new(
        component_name: impl Into<String>,
        component_version: impl Into<String>,
        cve_id: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            component_version: component_version.into(),
            cve_id: cve_id.into(),
            severity: severity.into(),
            detected_at: None,
        }
    }

    #[must_use]
    pub const fn detected_at(mut self, at: DateTime<Utc>) -> Self {
        self.detected_at = Some(at);
        self
    }

    /// Numeric severity rank (see [`severity_rank`]).
    #[must_use]
    pub fn rank(&self) -> u8 {
        severity_rank(&self.severity)
    }
}
