//! Conflict resolution over whole batches of references.
//!
//! Covers the worked scenarios plus the structural guarantees every
//! resolution must satisfy: one entry per reference, shared names get shared
//! display text, display names are segment-aligned suffixes, distinct names
//! stay distinct, and nothing is longer than it needs to be.

use std::collections::HashSet;

use rstest::rstest;

use fqnfold::fold::resolve_conflicts_with;
use fqnfold::{ConflictGroups, Execution, QualifiedName, QualifiedRef, Resolution, resolve_conflicts};

// ============================================================================
// HELPERS
// ============================================================================

fn groups_of(names: &[&str]) -> ConflictGroups<usize> {
    let mut groups = ConflictGroups::default();
    for (id, text) in names.iter().enumerate() {
        let name = QualifiedName::new(text).unwrap();
        groups
            .entry(name.simple_name().into())
            .or_insert_with(Vec::new)
            .push(QualifiedRef::new(id, name));
    }
    groups
}

fn display_names(names: &[&str]) -> Vec<String> {
    let resolution = resolve_conflicts(&groups_of(names));
    (0..names.len()).map(|id| resolution[&id].to_string()).collect()
}

/// Check every structural guarantee of a resolution.
fn assert_well_formed(groups: &ConflictGroups<usize>, resolution: &Resolution<usize>) {
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(resolution.len(), total, "every reference gets exactly one entry");

    for (simple_name, refs) in groups {
        let distinct: HashSet<&str> = refs.iter().map(|r| r.name.as_str()).collect();

        for r in refs {
            let display = resolution[&r.id].as_str();
            assert!(
                r.name.has_suffix(display),
                "`{display}` is not a suffix of `{}`",
                r.name
            );

            if distinct.len() <= 1 {
                assert_eq!(display, simple_name.as_str());
                continue;
            }

            // Minimal: no shorter suffix above the simple name would have been unique.
            let used = display.split('.').count();
            for shorter in 2..used {
                let candidate = r.name.suffix(shorter);
                assert!(
                    refs.iter()
                        .any(|o| o.name != r.name && o.name.has_suffix(candidate)),
                    "`{candidate}` was already unique for `{}`",
                    r.name
                );
            }
        }

        // Same qualified name, same display; different names, different display.
        for a in refs {
            for b in refs {
                let same_display = resolution[&a.id] == resolution[&b.id];
                assert_eq!(a.name == b.name, same_display || distinct.len() <= 1);
            }
        }
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[rstest]
#[case::two_packages(&["java.util.List", "java.awt.List"], &["util.List", "awt.List"])]
#[case::shared_parent_package(
    &["com.foo.bar.Baz", "com.alt.bar.Baz", "com.other.bar.Baz"],
    &["foo.bar.Baz", "alt.bar.Baz", "other.bar.Baz"]
)]
#[case::same_class_twice(&["java.lang.System", "java.lang.System"], &["System", "System"])]
#[case::single_reference(&["java.lang.System.Out"], &["Out"])]
#[case::unrelated_groups(&["java.util.List", "java.util.Map"], &["List", "Map"])]
#[case::mixed_duplicates(
    &["java.util.List", "java.awt.List", "java.util.List"],
    &["util.List", "awt.List", "util.List"]
)]
#[case::first_segment_only(&["a.x.Baz", "b.x.Baz"], &["a.x.Baz", "b.x.Baz"])]
fn test_scenarios(#[case] names: &[&str], #[case] expected: &[&str]) {
    assert_eq!(display_names(names), expected);
}

#[rstest]
#[case::jdk_lists(&["java.util.List", "java.awt.List", "java.util.List", "java.awt.List"])]
#[case::deep_collisions(&[
    "org.apache.commons.lang3.StringUtils",
    "org.apache.commons.lang.StringUtils",
    "org.springframework.util.StringUtils",
    "com.google.common.base.StringUtils",
    "io.micrometer.core.instrument.util.StringUtils",
])]
#[case::nested_suffixes(&["bar.Baz", "foo.bar.Baz", "x.foo.bar.Baz"])]
#[case::misaligned_tails(&["a.xbar.Baz", "b.bar.Baz", "c.ybar.Baz"])]
#[case::several_groups(&[
    "java.util.Date",
    "java.sql.Date",
    "java.util.List",
    "java.awt.List",
    "java.util.Map",
    "java.util.Map",
])]
fn test_resolution_is_well_formed(#[case] names: &[&str]) {
    let groups = groups_of(names);
    let resolution = resolve_conflicts(&groups);
    assert_well_formed(&groups, &resolution);
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_parallel_and_sequential_agree() {
    let names: Vec<String> = (0..40)
        .flat_map(|i| {
            [
                format!("org.team{i}.shared.core.Widget"),
                format!("org.team{}.shared.core.Widget", i % 7),
                format!("com.vendor{i}.Gadget"),
            ]
        })
        .collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let groups = groups_of(&names);

    let sequential = resolve_conflicts_with(&groups, Execution::Sequential);
    for _ in 0..5 {
        assert_eq!(resolve_conflicts_with(&groups, Execution::Parallel), sequential);
    }
    assert_well_formed(&groups, &sequential);
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = ["x.a.List", "y.a.List", "z.b.List", "java.util.List"];
    let mut backward = forward;
    backward.reverse();

    let mut a = display_names(&forward);
    let mut b = display_names(&backward);
    a.sort();
    b.sort();
    assert_eq!(a, b);
}
