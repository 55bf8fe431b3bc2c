//! Provider trait for extensibility.

use crate::error::Result;
use crate::model::{
    Component, SbomSnapshot, SnapshotContents, SnapshotId, VulnerabilityAssociation,
};

/// Source of snapshot metadata, components and vulnerability associations.
///
/// Implement this trait to plug the diff engine into a storage backend.
/// Unknown ids must surface as [`SbomDiffError::NotFound`](crate::error::SbomDiffError::NotFound);
/// backend failures as [`SbomDiffError::Provider`](crate::error::SbomDiffError::Provider).
///
/// # Example
///
/// ```ignore
/// use sbom_diff::provider::{InMemoryProvider, SnapshotProvider};
///
/// let provider = InMemoryProvider::from_path("snapshots.json")?;
/// let components = provider.components(snapshot_id)?;
/// ```
pub trait SnapshotProvider: Send + Sync {
    /// Metadata of one snapshot.
    fn snapshot(&self, id: SnapshotId) -> Result<SbomSnapshot>;

    /// Flattened component rows of one snapshot.
    fn components(&self, id: SnapshotId) -> Result<Vec<Component>>;

    /// Vulnerability associations of one snapshot.
    fn vulnerability_associations(&self, id: SnapshotId) -> Result<Vec<VulnerabilityAssociation>>;

    /// Name of this provider for logging.
    fn name(&self) -> &'static str;

    /// Fetch both lists; either failure fails the whole fetch.
    fn contents(&self, id: SnapshotId) -> Result<SnapshotContents> {
        let components = self.components(id)?;
        let vulnerabilities = self.vulnerability_associations(id)?;
        Ok(SnapshotContents::new(components, vulnerabilities))
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for &P {
    fn snapshot(&self, id: SnapshotId) -> Result<SbomSnapshot> {
        (**self).snapshot(id)
    }

    fn components(&self, id: SnapshotId) -> Result<Vec<Component>> {
        (**self).components(id)
    }

    fn vulnerability_associations(&self, id: SnapshotId) -> Result<Vec<VulnerabilityAssociation>> {
        (**self).vulnerability_associations(id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn contents(&self, id: SnapshotId) -> Result<SnapshotContents> {
        (**self).contents(id)
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for Box<P> {
    fn snapshot(&self, id: SnapshotId) -> Result<SbomSnapshot> {
        (**self).snapshot(id)
    }

    fn components(&self, id: SnapshotId) -> Result<Vec<Component>> {
        (**self).components(id)
    }

    fn vulnerability_associations(&self, id: SnapshotId) -> Result<Vec<VulnerabilityAssociation>> {
        (**self).vulnerability_associations(id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn contents(&self, id: SnapshotId) -> Result<SnapshotContents> {
        (**self).contents(id)
    }
}
