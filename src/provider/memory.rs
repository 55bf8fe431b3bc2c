//! In-memory snapshot provider and its JSON store format.

use super::SnapshotProvider;
use crate::error::{ErrorContext, OptionContext, ProviderErrorKind, Result, SbomDiffError};
use crate::model::{
    Component, SbomSnapshot, SnapshotContents, SnapshotId, VulnerabilityAssociation,
};
use crate::utils::null_as_empty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One snapshot with its records, as laid out in a store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSnapshot {
    #[serde(flatten)]
    pub snapshot: SbomSnapshot,
    #[serde(flatten)]
    pub contents: SnapshotContents,
}

/// Serialized snapshot store: `{ "snapshots": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStore {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub snapshots: Vec<StoredSnapshot>,
}

/// Provider holding every snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    snapshots: BTreeMap<SnapshotId, StoredSnapshot>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a snapshot.
    pub fn insert(&mut self, snapshot: SbomSnapshot, contents: SnapshotContents) {
        self.snapshots
            .insert(snapshot.id, StoredSnapshot { snapshot, contents });
    }

    /// Build a provider from a parsed store, rejecting duplicate ids.
    pub fn from_store(store: SnapshotStore) -> Result<Self> {
        let mut provider = Self::new();
        for stored in store.snapshots {
            let id = stored.snapshot.id;
            if provider.snapshots.insert(id, stored).is_some() {
                return Err(SbomDiffError::provider(
                    "building snapshot store",
                    ProviderErrorKind::Corrupt(format!("duplicate snapshot id {id}")),
                ));
            }
        }
        Ok(provider)
    }

    /// Parse a JSON snapshot store.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let store: SnapshotStore =
            serde_json::from_str(json).context("parsing snapshot store")?;
        Self::from_store(store)
    }

    /// Load a JSON snapshot store from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SbomDiffError::io(path, e))?;
        let provider = Self::from_json_str(&content)
            .with_context(|| format!("loading {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            snapshots = provider.len(),
            "snapshot store loaded"
        );
        Ok(provider)
    }

    /// Export the current contents as a store.
    #[must_use]
    pub fn to_store(&self) -> SnapshotStore {
        SnapshotStore {
            snapshots: self.snapshots.values().cloned().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Ids of all stored snapshots, in ascending order.
    pub fn snapshot_ids(&self) -> impl Iterator<Item = SnapshotId> + '_ {
        self.snapshots.keys().copied()
    }

    fn stored(&self, id: SnapshotId) -> Result<&StoredSnapshot> {
        self.snapshots.get(&id).or_snapshot_not_found(id)
    }
}

impl SnapshotProvider for InMemoryProvider {
    fn snapshot(&self, id: SnapshotId) -> Result<SbomSnapshot> {
        Ok(self.stored(id)?.snapshot.clone())
    }

    fn components(&self, id: SnapshotId) -> Result<Vec<Component>> {
        Ok(self.stored(id)?.contents.components.clone())
    }

    fn vulnerability_associations(&self, id: SnapshotId) -> Result<Vec<VulnerabilityAssociation>> {
        Ok(self.stored(id)?.contents.vulnerabilities.clone())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn contents(&self, id: SnapshotId) -> Result<SnapshotContents> {
        Ok(self.stored(id)?.contents.clone())
    }
}
