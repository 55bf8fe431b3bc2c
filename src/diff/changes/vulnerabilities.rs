//! Vulnerability change computer implementation.

use crate::diff::traits::ChangeComputer;
use crate::diff::NewVulnerability;
use crate::model::VulnerabilityAssociation;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

/// Computes which (component, CVE) pairs are new in the target snapshot.
///
/// Pairs are keyed by component *name*: a CVE that stays attached to
/// `foo` across a version bump is pre-existing, not new.
pub struct VulnerabilityChangeComputer;

impl VulnerabilityChangeComputer {
    /// Create a new vulnerability change computer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for VulnerabilityChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeComputer for VulnerabilityChangeComputer {
    type Input = VulnerabilityAssociation;
    type ChangeSet = Vec<NewVulnerability>;

    fn compute(
        &self,
        base: &[VulnerabilityAssociation],
        target: &[VulnerabilityAssociation],
    ) -> Vec<NewVulnerability> {
        let known: HashSet<(&str, &str)> = base
            .iter()
            .map(|a| (a.component_name.as_str(), a.cve_id.as_str()))
            .collect();

        // (cve, component, version) -> association; duplicates keep the
        // highest-ranked severity
        let mut fresh: BTreeMap<(&str, &str, &str), &VulnerabilityAssociation> = BTreeMap::new();
        for assoc in target {
            if known.contains(&(assoc.component_name.as_str(), assoc.cve_id.as_str())) {
                continue;
            }
            let key = (
                assoc.cve_id.as_str(),
                assoc.component_name.as_str(),
                assoc.component_version.as_str(),
            );
            match fresh.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(assoc);
                }
                Entry::Occupied(mut slot) => {
                    let current = *slot.get();
                    let outranks = assoc.rank() > current.rank()
                        || (assoc.rank() == current.rank() && assoc.severity < current.severity);
                    if outranks {
                        slot.insert(assoc);
                    }
                }
            }
        }

        let mut introduced: Vec<NewVulnerability> = fresh
            .into_values()
            .map(|a| {
                NewVulnerability::new(
                    a.cve_id.clone(),
                    a.component_name.clone(),
                    a.component_version.clone(),
                    a.severity.clone(),
                )
            })
            .collect();
        introduced.sort_by(NewVulnerability::severity_order);

        tracing::trace!(
            base_associations = base.len(),
            target_associations = target.len(),
            introduced = introduced.len(),
            "vulnerability delta computed"
        );
        introduced
    }

    fn name(&self) -> &'static str {
        "VulnerabilityChangeComputer"
    }
}
