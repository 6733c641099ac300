//! Minimum distinguishing names — the shortest unique dot-suffix per name.
//!
//! Given a set of distinct qualified names that all end in the same simple
//! name, each name is shortened to the fewest trailing segments that no
//! other name in the set also ends with.
//!
//! ## Algorithm
//!
//! For a name with segments `p[0..k]`:
//!
//! 1. If no other name ends with the simple name `p[k-1]`, the simple name
//!    is enough.
//! 2. Otherwise try `p[k-2..]`, `p[k-3..]`, … up to the full name `p[0..]`,
//!    and keep the first suffix no other name ends with. When none is
//!    unique the last one tried is kept.
//!
//! Matching is segment-aligned: `xbar.Baz` does not end with `bar.Baz`.
//!
//! Each name's result reads only the shared input slice, so names are
//! processed with a rayon parallel map and merged afterwards.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::Execution;
use crate::base::QualifiedName;

/// Compute the display name for every distinct name in `names`.
///
/// Callers pass at least two distinct names sharing a simple name. A single
/// name maps to its simple name and an empty slice to an empty map.
pub(crate) fn minimal_distinguishing_names<'a>(
    names: &[&'a QualifiedName],
    execution: Execution,
) -> FxHashMap<&'a str, SmolStr> {
    debug_assert!(
        names.iter().all(|n| n.simple_name() == names[0].simple_name()),
        "names must share a simple name"
    );

    let shorten = |&name: &&'a QualifiedName| {
        (name.as_str(), SmolStr::new(distinguishing_name(name, names)))
    };

    match execution {
        Execution::Parallel => names.par_iter().map(shorten).collect(),
        Execution::Sequential => names.iter().map(shorten).collect(),
    }
}

/// Shortest suffix of `name` that no other member of `names` ends with.
fn distinguishing_name<'n>(name: &'n QualifiedName, names: &[&QualifiedName]) -> &'n str {
    let simple = name.simple_name();
    if !shared_by_other(name, simple, names) {
        return simple;
    }

    let mut candidate = simple;
    for count in 2..=name.segment_count() {
        candidate = name.suffix(count);
        if !shared_by_other(name, candidate, names) {
            break;
        }
    }
    candidate
}

fn shared_by_other(name: &QualifiedName, suffix: &str, names: &[&QualifiedName]) -> bool {
    names
        .iter()
        .any(|other| other.as_str() != name.as_str() && other.has_suffix(suffix))
}
