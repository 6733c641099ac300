//! Conflict resolution — choosing a display name for every reference.
//!
//! References are grouped by simple name. A group with one reference, or
//! whose references all carry the same qualified name, displays the simple
//! name. Anything else goes through
//! [`minimal_distinguishing_names`](super::distinguish) and the result is
//! fanned back out to every reference sharing a qualified name.

use std::hash::Hash;

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::distinguish::minimal_distinguishing_names;
use super::{ConflictGroups, Execution, QualifiedRef, Resolution};
use crate::base::QualifiedName;

/// Resolve display names for every reference, spreading groups across the
/// rayon pool.
///
/// The caller owns grouping: every reference in a group is trusted to end
/// with that group's simple name.
///
/// ```
/// use fqnfold::base::QualifiedName;
/// use fqnfold::fold::{resolve_conflicts, ConflictGroups, QualifiedRef};
///
/// let mut groups = ConflictGroups::default();
/// groups.insert(
///     "List".into(),
///     vec![
///         QualifiedRef::new(1, QualifiedName::new("java.util.List").unwrap()),
///         QualifiedRef::new(2, QualifiedName::new("java.awt.List").unwrap()),
///     ],
/// );
///
/// let resolution = resolve_conflicts(&groups);
/// assert_eq!(resolution[&1], "util.List");
/// assert_eq!(resolution[&2], "awt.List");
/// ```
pub fn resolve_conflicts<R>(groups: &ConflictGroups<R>) -> Resolution<R>
where
    R: Clone + Eq + Hash + Send + Sync,
{
    resolve_conflicts_with(groups, Execution::Parallel)
}

/// Resolve display names with an explicit execution strategy.
///
/// Output is identical for both strategies.
pub fn resolve_conflicts_with<R>(
    groups: &ConflictGroups<R>,
    execution: Execution,
) -> Resolution<R>
where
    R: Clone + Eq + Hash + Send + Sync,
{
    tracing::debug!(groups = groups.len(), ?execution, "resolving fold conflicts");

    let assigned: Vec<Vec<(R, SmolStr)>> = match execution {
        Execution::Parallel => groups
            .par_iter()
            .map(|(simple_name, refs)| resolve_group(simple_name, refs, execution))
            .collect(),
        Execution::Sequential => groups
            .iter()
            .map(|(simple_name, refs)| resolve_group(simple_name, refs, execution))
            .collect(),
    };

    let total = assigned.iter().map(Vec::len).sum();
    let mut resolution = Resolution::with_capacity_and_hasher(total, Default::default());
    resolution.extend(assigned.into_iter().flatten());
    resolution
}

fn resolve_group<R: Clone>(
    simple_name: &SmolStr,
    refs: &[QualifiedRef<R>],
    execution: Execution,
) -> Vec<(R, SmolStr)> {
    if refs.len() == 1 {
        return vec![(refs[0].id.clone(), simple_name.clone())];
    }

    // Partition by exact qualified name, keeping first-seen order.
    let mut by_name: IndexMap<&QualifiedName, Vec<&R>> = IndexMap::new();
    for r in refs {
        by_name.entry(&r.name).or_default().push(&r.id);
    }

    if by_name.len() <= 1 {
        return refs
            .iter()
            .map(|r| (r.id.clone(), simple_name.clone()))
            .collect();
    }

    tracing::trace!(
        %simple_name,
        references = refs.len(),
        distinct = by_name.len(),
        "conflict group needs disambiguation"
    );

    let distinct: Vec<&QualifiedName> = by_name.keys().copied().collect();
    let folded: FxHashMap<&str, SmolStr> = minimal_distinguishing_names(&distinct, execution);

    let mut out = Vec::with_capacity(refs.len());
    for (name, ids) in by_name {
        let display = folded
            .get(name.as_str())
            .cloned()
            .unwrap_or_else(|| SmolStr::new(name.simple_name()));
        out.extend(ids.into_iter().map(|id| (id.clone(), display.clone())));
    }
    out
}
