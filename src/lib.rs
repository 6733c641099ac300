//! # fqnfold
//!
//! Shortest distinguishing display names for fully qualified identifiers.
//!
//! Given many occurrences of names like `java.util.List` and `java.awt.List`,
//! decide how much of each name has to stay visible once it is folded:
//! `util.List` and `awt.List` here, while a lone `java.util.Map` folds to
//! plain `Map`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! fold    → collection, conflict resolution, fold regions
//!   ↓
//! config  → FoldSettings, Threshold
//!   ↓
//! base    → Primitives (QualifiedName, TextRange)
//! ```

/// Foundation types: QualifiedName, TextRange
pub mod base;

/// Settings passed to the collection step
pub mod config;

/// Folding pipeline: candidate sites → conflict groups → display names
pub mod fold;

pub use base::{NameError, QualifiedName, TextRange, TextSize};
pub use config::{FoldSettings, SettingsError, Threshold};
pub use fold::{
    CandidateSite, ConflictGroups, Execution, FoldRegion, QualifiedRef, Resolution, fold_regions,
    resolve_conflicts,
};
