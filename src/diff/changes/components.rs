//! Component change computer implementation.

use crate::diff::traits::{ChangeComputer, ComponentChangeSet};
use crate::diff::{ComponentEntry, MatchKey, UpdatedComponent};
use crate::model::Component;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Identity of a logical component: name plus, optionally, purl type.
type IdentityKey = (String, Option<String>);

/// Classifies two component lists into added, removed and updated entries.
///
/// Matching is sort-based: both sides are de-duplicated by (key, version),
/// grouped by identity key, and version instances inside a group are paired
/// in ascending version-string order.
pub struct ComponentChangeComputer {
    match_key: MatchKey,
}

impl ComponentChangeComputer {
    /// Create a component change computer using the given identity key.
    #[must_use]
    pub const fn new(match_key: MatchKey) -> Self {
        Self { match_key }
    }

    fn identity_key(&self, component: &Component) -> IdentityKey {
        match self.match_key {
            MatchKey::Name => (component.name.clone(), None),
            MatchKey::NameAndPurlType => (component.name.clone(), component.purl_type()),
        }
    }

    /// Group components by identity key, dropping duplicate versions.
    ///
    /// Each group is sorted by version and holds every version once. When
    /// duplicate rows disagree on license, a non-empty license wins, then
    /// the lexicographically smallest one.
    fn group<'a>(&self, components: &'a [Component]) -> BTreeMap<IdentityKey, Vec<&'a Component>> {
        let mut keyed: Vec<(IdentityKey, &Component)> = components
            .iter()
            .map(|c| (self.identity_key(c), c))
            .collect();
        keyed.sort_by(|(ka, a), (kb, b)| {
            ka.cmp(kb)
                .then_with(|| a.version.cmp(&b.version))
                .then_with(|| license_preference(a, b))
        });

        let mut groups: BTreeMap<IdentityKey, Vec<&Component>> = BTreeMap::new();
        for (key, component) in keyed {
            let group = groups.entry(key).or_default();
            if group
                .last()
                .is_some_and(|last| last.version == component.version)
            {
                continue;
            }
            group.push(component);
        }
        groups
    }

    /// Classify the instances of one identity present on both sides.
    fn pair_group(base: &[&Component], target: &[&Component], result: &mut ComponentChangeSet) {
        let base_versions: BTreeSet<&str> = base.iter().map(|c| c.version.as_str()).collect();
        let target_versions: BTreeSet<&str> = target.iter().map(|c| c.version.as_str()).collect();

        let base_left: Vec<&Component> = base
            .iter()
            .copied()
            .filter(|c| !target_versions.contains(c.version.as_str()))
            .collect();
        let target_left: Vec<&Component> = target
            .iter()
            .copied()
            .filter(|c| !base_versions.contains(c.version.as_str()))
            .collect();
        result.unchanged += base.len() - base_left.len();

        let paired = base_left.len().min(target_left.len());
        for (old, new) in base_left.iter().zip(&target_left) {
            result.updated.push(UpdatedComponent::new(
                new.name.clone(),
                old.version.clone(),
                new.version.clone(),
            ));
        }
        result
            .removed
            .extend(base_left[paired..].iter().map(|c| ComponentEntry::from(*c)));
        result
            .added
            .extend(target_left[paired..].iter().map(|c| ComponentEntry::from(*c)));
    }
}

/// Non-empty licenses sort first, then lexicographically.
fn license_preference(a: &Component, b: &Component) -> Ordering {
    let a = a.license_or_empty();
    let b = b.license_or_empty();
    (a.is_empty(), a).cmp(&(b.is_empty(), b))
}

impl Default for ComponentChangeComputer {
    fn default() -> Self {
        Self::new(MatchKey::default())
    }
}

impl ChangeComputer for ComponentChangeComputer {
    type Input = Component;
    type ChangeSet = ComponentChangeSet;

    fn compute(&self, base: &[Component], target: &[Component]) -> ComponentChangeSet {
        let mut result = ComponentChangeSet::new();
        let mut base_groups = self.group(base);
        let target_groups = self.group(target);

        for (key, target_instances) in target_groups {
            match base_groups.remove(&key) {
                Some(base_instances) => {
                    Self::pair_group(&base_instances, &target_instances, &mut result);
                }
                None => result
                    .added
                    .extend(target_instances.into_iter().map(ComponentEntry::from)),
            }
        }

        for base_instances in base_groups.into_values() {
            result
                .removed
                .extend(base_instances.into_iter().map(ComponentEntry::from));
        }

        result.sort();
        result
    }

    fn name(&self) -> &'static str {
        "ComponentChangeComputer"
    }
}
