//! Snapshot identity and metadata.

use super::{Component, VulnerabilityAssociation};
use crate::error::SbomDiffError;
use crate::utils::null_as_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of one imported SBOM snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for SnapshotId {
    type Err = SbomDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Source format of the imported manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SbomFormat {
    #[serde(alias = "cdx")]
    CycloneDx,
    Spdx,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CycloneDx => write!(f, "CycloneDX"),
            Self::Spdx => write!(f, "SPDX"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Immutable record describing one imported manifest.
///
/// Snapshots are never mutated after import; diffing only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomSnapshot {
    pub id: SnapshotId,
    /// Owning project
    pub project_id: String,
    #[serde(default)]
    pub format: SbomFormat,
    #[serde(default)]
    pub format_version: String,
    pub created_at: DateTime<Utc>,
}

impl SbomSnapshot {
    /// Create snapshot metadata stamped with the current time.
    pub fn new(id: SnapshotId, project_id: impl Into<String>, format: SbomFormat) -> Self {
        Self {
            id,
            project_id: project_id.into(),
            format,
            format_version: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the format version.
    #[must_use]
    pub fn with_format_version(mut self, version: impl Into<String>) -> Self {
        self.format_version = version.into();
        self
    }

    /// Whether both snapshots belong to the same project.
    #[must_use]
    pub fn same_project(&self, other: &Self) -> bool {
        self.project_id == other.project_id
    }
}

/// Everything the diff engine needs from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotContents {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub components: Vec<Component>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulnerabilities: Vec<VulnerabilityAssociation>,
}

impl SnapshotContents {
    pub const fn new(
        components: Vec<Component>,
        vulnerabilities: Vec<VulnerabilityAssociation>,
    ) -> Self {
        Self {
            components,
            vulnerabilities,
        }
    }

    /// A legitimately empty SBOM.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
