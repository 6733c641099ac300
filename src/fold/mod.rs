//! Qualified-name folding — from candidate sites to placeholder text.
//!
//! The pipeline has three stages:
//!
//! ```text
//! CandidateSite ──collect──▶ ConflictGroups ──resolve──▶ Resolution ──regions──▶ FoldRegion
//!   (caller)     settings       by simple name      pure core       sorted by offset
//! ```
//!
//! Only `collect` looks at [`FoldSettings`](crate::config::FoldSettings).
//! Resolution is a pure function of the grouped input: no configuration, no
//! I/O, no state kept between calls.
//!
//! ## Usage
//!
//! ```
//! use fqnfold::base::{TextRange, TextSize};
//! use fqnfold::config::FoldSettings;
//! use fqnfold::fold::{fold_regions, CandidateSite, TypeSite};
//!
//! let at = |start: u32, text: &str| {
//!     TypeSite::new(text, TextRange::at(TextSize::from(start), TextSize::of(text)))
//! };
//! let sites = [
//!     CandidateSite::TypeElement(at(0, "java.util.List")),
//!     CandidateSite::TypeElement(at(40, "java.awt.List")),
//! ];
//!
//! let settings = FoldSettings::default().with_threshold(8).unwrap();
//! let regions = fold_regions(&sites, &settings);
//! let placeholders: Vec<_> = regions.iter().map(|r| r.placeholder.as_str()).collect();
//! assert_eq!(placeholders, ["util.List", "awt.List"]);
//! ```

mod collect;
mod conflict;
mod distinguish;
mod regions;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::QualifiedName;

pub use collect::{CandidateSite, MemberAccessSite, TypeSite, collect_conflict_groups};
pub use conflict::{resolve_conflicts, resolve_conflicts_with};
pub use regions::{FOLD_GROUP, FoldRegion, fold_regions};

// ============================================================================
// SHARED TYPES
// ============================================================================

/// One occurrence of a qualified name, tagged with a caller identity.
///
/// The identity is opaque here; it only has to be usable as a map key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedRef<R> {
    /// Caller-supplied identity (a text range, a node id, ...).
    pub id: R,
    /// The qualified name this occurrence spells out.
    pub name: QualifiedName,
}

impl<R> QualifiedRef<R> {
    pub fn new(id: R, name: QualifiedName) -> Self {
        Self { id, name }
    }
}

/// References grouped by simple name, in first-seen order.
pub type ConflictGroups<R> = IndexMap<SmolStr, Vec<QualifiedRef<R>>>;

/// Display name chosen for each reference.
pub type Resolution<R> = FxHashMap<R, SmolStr>;

/// How resolution spreads its work.
///
/// Both strategies produce the same [`Resolution`]; parallelism only
/// changes which thread does the work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Fan groups and names out over the rayon thread pool.
    #[default]
    Parallel,
    /// Run everything on the calling thread.
    Sequential,
}

/// Add `reference` to the group for its simple name.
pub(crate) fn push_grouped<R>(groups: &mut ConflictGroups<R>, reference: QualifiedRef<R>) {
    groups
        .entry(SmolStr::new(reference.name.simple_name()))
        .or_default()
        .push(reference);
}
