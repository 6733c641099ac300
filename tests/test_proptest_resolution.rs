//! Property-based checks for conflict resolution.
//!
//! Generates batches of dotted names drawn from a small segment alphabet so
//! that simple names and package paths collide often, then verifies the
//! guarantees every resolution must hold regardless of input.
#![cfg(feature = "proptest")]

use std::collections::BTreeSet;

use proptest::prelude::*;

use fqnfold::fold::resolve_conflicts_with;
use fqnfold::{ConflictGroups, Execution, QualifiedName, QualifiedRef};

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Short segments from a tiny alphabet, so suffixes collide.
fn arb_segment() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

/// A name of 1..=5 segments ending in one of three simple names.
fn arb_name() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_segment(), 0..5),
        prop::sample::select(vec!["List", "Map", "Baz"]),
    )
        .prop_map(|(mut segments, simple)| {
            segments.push(simple.to_owned());
            segments.join(".")
        })
}

fn arb_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 1..24)
}

fn group(batch: &[String]) -> ConflictGroups<usize> {
    let mut groups = ConflictGroups::default();
    for (id, text) in batch.iter().enumerate() {
        let name = QualifiedName::new(text).unwrap();
        groups
            .entry(name.simple_name().into())
            .or_insert_with(Vec::new)
            .push(QualifiedRef::new(id, name));
    }
    groups
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn every_reference_resolves_to_a_suffix(batch in arb_batch()) {
        let groups = group(&batch);
        let resolution = resolve_conflicts_with(&groups, Execution::Parallel);

        prop_assert_eq!(resolution.len(), batch.len());
        for refs in groups.values() {
            for r in refs {
                prop_assert!(r.name.has_suffix(&resolution[&r.id]));
            }
        }
    }

    #[test]
    fn distinct_names_get_distinct_display(batch in arb_batch()) {
        let groups = group(&batch);
        let resolution = resolve_conflicts_with(&groups, Execution::Parallel);

        for refs in groups.values() {
            let names: BTreeSet<&str> = refs.iter().map(|r| r.name.as_str()).collect();
            let shown: BTreeSet<&str> = refs.iter().map(|r| resolution[&r.id].as_str()).collect();
            prop_assert_eq!(names.len(), shown.len());
        }
    }

    #[test]
    fn parallel_matches_sequential(batch in arb_batch()) {
        let groups = group(&batch);
        prop_assert_eq!(
            resolve_conflicts_with(&groups, Execution::Parallel),
            resolve_conflicts_with(&groups, Execution::Sequential)
        );
    }

    #[test]
    fn single_name_groups_show_simple_name(batch in arb_batch()) {
        let groups = group(&batch);
        let resolution = resolve_conflicts_with(&groups, Execution::Sequential);

        for (simple_name, refs) in &groups {
            let distinct: BTreeSet<&str> = refs.iter().map(|r| r.name.as_str()).collect();
            if distinct.len() == 1 {
                for r in refs {
                    prop_assert_eq!(&resolution[&r.id], simple_name);
                }
            }
        }
    }
}
