//! Candidate collection — which syntax sites are worth folding.
//!
//! The caller walks its own syntax tree and reports every site that spells
//! out a dotted type name. This module applies the eligibility rules
//! (length threshold, arrays, inner classes, static member access) and
//! groups what survives by simple name. No parsing happens here; each site
//! carries its source text and range.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::{ConflictGroups, QualifiedRef, push_grouped};
use crate::base::{QualifiedName, simple_name_of};
use crate::config::FoldSettings;

/// Segments that look like class names but are conventional package names.
const COMMON_PACKAGE_SEGMENTS: &[&str] = &[
    "awt", "util", "io", "nio", "sql", "net", "lang", "math", "text",
];

// ============================================================================
// SITES
// ============================================================================

/// Source text of a type reference and where it sits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSite {
    pub text: SmolStr,
    pub range: TextRange,
}

impl TypeSite {
    pub fn new(text: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }
}

/// A `a.b.Type.member` access, described by its qualifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberAccessSite {
    /// The `a.b.Type` part.
    pub qualifier: TypeSite,
    /// Whether the qualifier resolved to a class.
    ///
    /// When `false`, an uppercase last segment still counts as a class.
    pub qualifier_is_class: bool,
    /// Whether the accessed field or method is static.
    pub member_is_static: bool,
}

/// A syntax site that may hold a foldable qualified name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidateSite {
    /// A type in a declaration, parameter or return position.
    TypeElement(TypeSite),
    /// The class reference of an object creation expression.
    NewExpression(TypeSite),
    /// The target type of a cast, if the cast has one.
    TypeCast(Option<TypeSite>),
    /// The checked type of an `instanceof`, if present.
    InstanceOf(Option<TypeSite>),
    /// A static field or method accessed through its qualified class.
    StaticMemberAccess(MemberAccessSite),
}

// ============================================================================
// COLLECTION
// ============================================================================

/// Filter `sites` by `settings` and group the survivors by simple name.
///
/// Each reference is identified by the range that should be folded.
/// Returns no groups when folding is disabled.
pub fn collect_conflict_groups<'a>(
    sites: impl IntoIterator<Item = &'a CandidateSite>,
    settings: &FoldSettings,
) -> ConflictGroups<TextRange> {
    let mut groups = ConflictGroups::default();
    if !settings.enabled {
        return groups;
    }

    let threshold = settings.threshold.get();
    let mut seen = 0usize;
    for site in sites {
        seen += 1;
        if let Some(reference) = candidate(site, threshold) {
            push_grouped(&mut groups, reference);
        }
    }

    tracing::debug!(sites = seen, groups = groups.len(), "collected fold candidates");
    groups
}

fn candidate(site: &CandidateSite, threshold: usize) -> Option<QualifiedRef<TextRange>> {
    match site {
        CandidateSite::TypeElement(ty) => type_element(ty, threshold),
        CandidateSite::NewExpression(ty) => new_expression(ty, threshold),
        CandidateSite::TypeCast(ty) | CandidateSite::InstanceOf(ty) => {
            ty.as_ref().and_then(|ty| type_element(ty, threshold))
        }
        CandidateSite::StaticMemberAccess(access) => static_member_access(access, threshold),
    }
}

fn type_element(site: &TypeSite, threshold: usize) -> Option<QualifiedRef<TextRange>> {
    let (main, range) = strip_type_arguments(site)?;
    if !main.contains('.') || char_len(main) <= threshold || is_array_type(main) {
        return None;
    }
    if is_inner_class_reference(main) {
        return None;
    }
    reference(main, range)
}

fn new_expression(site: &TypeSite, threshold: usize) -> Option<QualifiedRef<TextRange>> {
    let (main, range) = strip_type_arguments(site)?;
    if !main.contains('.') || char_len(main) <= threshold || is_inner_class_reference(main) {
        return None;
    }
    reference(main, range)
}

fn static_member_access(
    access: &MemberAccessSite,
    threshold: usize,
) -> Option<QualifiedRef<TextRange>> {
    let text = access.qualifier.text.as_str();
    if !text.contains('.') || !access.member_is_static {
        return None;
    }
    if !access.qualifier_is_class && !starts_uppercase(simple_name_of(text)) {
        return None;
    }
    if char_len(text) <= threshold || is_inner_class_reference(text) {
        return None;
    }
    reference(text, access.qualifier.range)
}

fn reference(text: &str, range: TextRange) -> Option<QualifiedRef<TextRange>> {
    match QualifiedName::new(text) {
        Ok(name) => Some(QualifiedRef::new(range, name)),
        Err(err) => {
            tracing::trace!(%err, ?range, "skipping malformed qualified name");
            None
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Cut `List<String>` down to `List`, shrinking the range to match.
///
/// A `<` at offset 0 is not treated as type arguments.
fn strip_type_arguments(site: &TypeSite) -> Option<(&str, TextRange)> {
    let text = site.text.as_str();
    match text.find('<') {
        Some(open) if open > 0 => {
            let len = TextSize::try_from(open).ok()?;
            Some((text[..open].trim(), TextRange::at(site.range.start(), len)))
        }
        _ => Some((text, site.range)),
    }
}

fn is_array_type(text: &str) -> bool {
    text.contains(['[', ']'])
}

/// `Outer.Inner` or `Outer$Inner`: nested classes stay as written.
fn is_inner_class_reference(text: &str) -> bool {
    if text.contains('$') {
        return true;
    }

    let mut segments = text.rsplit('.');
    let (Some(last), Some(owner)) = (segments.next(), segments.next()) else {
        return false;
    };

    starts_uppercase(owner) && starts_uppercase(last) && !is_common_package_name(owner)
}

fn is_common_package_name(segment: &str) -> bool {
    segment == segment.to_lowercase() || COMMON_PACKAGE_SEGMENTS.contains(&segment)
}

fn starts_uppercase(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_uppercase)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
