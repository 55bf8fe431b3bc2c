//! Property-based tests for the diff engine.
//!
//! Random component and vulnerability lists over a small alphabet so that
//! names, versions and CVE ids collide often.

use proptest::prelude::*;
use sbom_diff::{
    diff::DiffEngine,
    model::{Component, SnapshotContents, VulnerabilityAssociation},
};
use std::collections::{BTreeMap, BTreeSet};

fn component() -> impl Strategy<Value = Component> {
    ("[a-e]{1,2}", "[0-2]\\.[0-2]", prop::option::of("(MIT|ISC|Apache-2\\.0)")).prop_map(
        |(name, version, license)| {
            let component = Component::new(name, version);
            match license {
                Some(license) => component.with_license(license),
                None => component,
            }
        },
    )
}

fn association() -> impl Strategy<Value = VulnerabilityAssociation> {
    (
        "[a-e]{1,2}",
        "[0-2]\\.[0-2]",
        "CVE-2024-000[0-4]",
        prop::sample::select(vec!["CRITICAL", "High", "medium", "LOW", "unknown", ""]),
    )
        .prop_map(|(name, version, cve, severity)| {
            VulnerabilityAssociation::new(name, version, cve, severity)
        })
}

fn contents() -> impl Strategy<Value = SnapshotContents> {
    (
        prop::collection::vec(component(), 0..12),
        prop::collection::vec(association(), 0..8),
    )
        .prop_map(|(components, vulns)| SnapshotContents::new(components, vulns))
}

/// Snapshot with at most one version per component name.
fn single_instance_contents() -> impl Strategy<Value = SnapshotContents> {
    prop::collection::btree_map("[a-h]", "[0-3]", 0..8).prop_map(|versions| {
        let components = versions
            .into_iter()
            .map(|(name, version)| Component::new(name, version))
            .collect();
        SnapshotContents::new(components, Vec::new())
    })
}

fn reversed(contents: &SnapshotContents) -> SnapshotContents {
    let mut components = contents.components.clone();
    let mut vulns = contents.vulnerabilities.clone();
    components.reverse();
    vulns.reverse();
    SnapshotContents::new(components, vulns)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn diff_with_itself_is_empty(a in contents()) {
        let result = DiffEngine::new().diff(&a, &a);
        prop_assert!(result.added.is_empty());
        prop_assert!(result.removed.is_empty());
        prop_assert!(result.updated.is_empty());
        prop_assert!(result.new_vulnerabilities.is_empty());
    }

    #[test]
    fn diff_is_deterministic_and_order_independent(a in contents(), b in contents()) {
        let engine = DiffEngine::new();
        let first = serde_json::to_string(&engine.diff(&a, &b)).unwrap();
        let second = serde_json::to_string(&engine.diff(&a, &b)).unwrap();
        let shuffled = serde_json::to_string(&engine.diff(&reversed(&a), &reversed(&b))).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &shuffled);
    }

    #[test]
    fn added_and_removed_swap_with_direction(a in contents(), b in contents()) {
        let engine = DiffEngine::new();
        let forward = engine.diff(&a, &b);
        let backward = engine.diff(&b, &a);

        let pairs = |entries: &[sbom_diff::ComponentEntry]| -> BTreeSet<(String, String)> {
            entries.iter().map(|e| (e.name.clone(), e.version.clone())).collect()
        };
        prop_assert_eq!(pairs(&forward.added), pairs(&backward.removed));
        prop_assert_eq!(pairs(&forward.removed), pairs(&backward.added));
        prop_assert_eq!(forward.updated.len(), backward.updated.len());
    }

    #[test]
    fn every_single_instance_name_is_classified_once(
        a in single_instance_contents(),
        b in single_instance_contents(),
    ) {
        let result = DiffEngine::new().diff(&a, &b);
        let base: BTreeMap<&str, &str> =
            a.components.iter().map(|c| (c.name.as_str(), c.version.as_str())).collect();
        let target: BTreeMap<&str, &str> =
            b.components.iter().map(|c| (c.name.as_str(), c.version.as_str())).collect();

        let names: BTreeSet<&str> = base.keys().chain(target.keys()).copied().collect();
        for name in names {
            let added = result.added.iter().filter(|e| e.name == name).count();
            let removed = result.removed.iter().filter(|e| e.name == name).count();
            let updated = result.updated.iter().filter(|e| e.name == name).count();
            let unchanged = usize::from(
                base.get(name).is_some() && base.get(name) == target.get(name),
            );
            prop_assert_eq!(added + removed + updated + unchanged, 1, "name {}", name);
        }
    }

    #[test]
    fn known_cves_are_never_new(a in contents(), b in contents()) {
        let result = DiffEngine::new().diff(&a, &b);
        let known: BTreeSet<(&str, &str)> = a
            .vulnerabilities
            .iter()
            .map(|v| (v.component_name.as_str(), v.cve_id.as_str()))
            .collect();

        for vuln in &result.new_vulnerabilities {
            prop_assert!(!known.contains(&(vuln.component.as_str(), vuln.cve_id.as_str())));
        }
        prop_assert_eq!(result.summary.new_vulnerabilities_count, result.new_vulnerabilities.len());
    }
}
