//! Provider-backed diff service.

use super::{DiffEngine, DiffResult};
use crate::error::{ErrorContext, Result};
use crate::model::SnapshotId;
use crate::provider::SnapshotProvider;

/// Binds a [`DiffEngine`] to a [`SnapshotProvider`].
///
/// Fetching is the only fallible (and the only I/O) step. Once both
/// snapshots are in memory the comparison runs to completion.
pub struct SnapshotDiffService<P> {
    provider: P,
    engine: DiffEngine,
}

impl<P: SnapshotProvider> SnapshotDiffService<P> {
    pub const fn new(provider: P, engine: DiffEngine) -> Self {
        Self { provider, engine }
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    pub const fn engine(&self) -> &DiffEngine {
        &self.engine
    }

    /// Diff two stored snapshots.
    ///
    /// Any provider failure fails the whole diff, including a failed
    /// vulnerability fetch after a successful component fetch: a result
    /// without vulnerability deltas would under-report risk.
    pub fn diff(&self, base: SnapshotId, target: SnapshotId) -> Result<DiffResult> {
        let base_contents = self
            .provider
            .contents(base)
            .with_context(|| format!("loading base snapshot {base}"))?;
        let target_contents = self
            .provider
            .contents(target)
            .with_context(|| format!("loading target snapshot {target}"))?;

        let result = self.engine.diff(&base_contents, &target_contents);
        tracing::debug!(
            %base,
            %target,
            provider = self.provider.name(),
            added = result.summary.added_count,
            removed = result.summary.removed_count,
            updated = result.summary.updated_count,
            new_vulnerabilities = result.summary.new_vulnerabilities_count,
            "snapshot diff complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProviderErrorKind, SbomDiffError};
    use crate::model::{
        Component, SbomFormat, SbomSnapshot, SnapshotContents, VulnerabilityAssociation,
    };
    use crate::provider::InMemoryProvider;

    /// Components load fine, vulnerability lookups always fail.
    struct FlakyVulnProvider(InMemoryProvider);

    impl SnapshotProvider for FlakyVulnProvider {
        fn snapshot(&self, id: SnapshotId) -> Result<SbomSnapshot> {
            self.0.snapshot(id)
        }

        fn components(&self, id: SnapshotId) -> Result<Vec<Component>> {
            self.0.components(id)
        }

        fn vulnerability_associations(
            &self,
            _id: SnapshotId,
        ) -> Result<Vec<VulnerabilityAssociation>> {
            Err(SbomDiffError::provider(
                "querying vulnerability associations",
                ProviderErrorKind::Unavailable("connection reset".to_string()),
            ))
        }

        fn name(&self) -> &'static str {
            "flaky"
        }
    }

    fn store_with_two_snapshots() -> (InMemoryProvider, SnapshotId, SnapshotId) {
        let base = SnapshotId::new_v4();
        let target = SnapshotId::new_v4();
        let mut store = InMemoryProvider::new();
        store.insert(
            SbomSnapshot::new(base, "web", SbomFormat::CycloneDx),
            SnapshotContents::new(vec![Component::new("axios", "1.3.0")], Vec::new()),
        );
        store.insert(
            SbomSnapshot::new(target, "web", SbomFormat::CycloneDx),
            SnapshotContents::new(
                vec![Component::new("axios", "1.4.0")],
                vec![VulnerabilityAssociation::new(
                    "axios",
                    "1.4.0",
                    "CVE-2023-45857",
                    "MEDIUM",
                )],
            ),
        );
        (store, base, target)
    }

    #[test]
    fn test_service_diff() {
        let (store, base, target) = store_with_two_snapshots();
        let service = SnapshotDiffService::new(store, DiffEngine::new());
        let result = service.diff(base, target).expect("diff should succeed");

        assert_eq!(result.summary.updated_count, 1);
        assert_eq!(result.summary.new_vulnerabilities_count, 1);
    }

    #[test]
    fn test_unknown_snapshot_is_not_found() {
        let (store, base, _) = store_with_two_snapshots();
        let service = SnapshotDiffService::new(store, DiffEngine::new());
        let err = service.diff(base, SnapshotId::new_v4()).unwrap_err();
        assert!(matches!(err, SbomDiffError::NotFound { .. }));
    }

    #[test]
    fn test_vulnerability_fetch_failure_fails_whole_diff() {
        let (store, base, target) = store_with_two_snapshots();
        let service = SnapshotDiffService::new(FlakyVulnProvider(store), DiffEngine::new());

        match service.diff(base, target) {
            Err(SbomDiffError::Provider { context, .. }) => {
                assert!(context.starts_with("loading base snapshot"), "{context}");
                assert!(context.contains("vulnerability associations"), "{context}");
            }
            other => panic!("Expected Provider error, got {other:?}"),
        }
    }
}
