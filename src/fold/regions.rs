//! Fold regions — collapsible ranges with their placeholder text.

use smol_str::SmolStr;
use text_size::TextRange;

use super::collect::{CandidateSite, collect_conflict_groups};
use super::conflict::resolve_conflicts;
use crate::config::FoldSettings;

/// Label shared by every region this crate produces, so an editor can
/// expand or collapse them together.
pub const FOLD_GROUP: &str = "qualified-name";

/// A range to collapse and the text shown in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    /// Source range of the qualified name (type arguments excluded)
    pub range: TextRange,
    /// Shortened name to display
    pub placeholder: SmolStr,
    /// Whether the region starts out collapsed
    pub collapsed_by_default: bool,
}

/// Get fold regions for a batch of candidate sites.
///
/// Returns one region per eligible site, sorted by start offset.
pub fn fold_regions<'a>(
    sites: impl IntoIterator<Item = &'a CandidateSite>,
    settings: &FoldSettings,
) -> Vec<FoldRegion> {
    let groups = collect_conflict_groups(sites, settings);
    if groups.is_empty() {
        return Vec::new();
    }

    let mut regions: Vec<FoldRegion> = resolve_conflicts(&groups)
        .into_iter()
        .map(|(range, placeholder)| FoldRegion {
            range,
            placeholder,
            collapsed_by_default: true,
        })
        .collect();

    // Sort by position
    regions.sort_by_key(|r| (r.range.start(), r.range.end()));

    regions
}
