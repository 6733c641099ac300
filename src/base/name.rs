//! Dotted qualified names and their segment suffixes.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

/// Reasons a string cannot be used as a [`QualifiedName`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("qualified name is empty")]
    Empty,
    #[error("qualified name `{name}` has an empty segment at position {index}")]
    EmptySegment { name: String, index: usize },
}

/// A dot-separated identifier such as `java.util.List`.
///
/// Always holds at least one segment and never an empty one, so every
/// suffix handed out by [`QualifiedName::suffix`] is itself a well-formed
/// qualified name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName(SmolStr);

impl QualifiedName {
    /// Validate and wrap a qualified name.
    pub fn new(text: impl AsRef<str>) -> Result<Self, NameError> {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(index) = text.split('.').position(str::is_empty) {
            return Err(NameError::EmptySegment {
                name: text.to_owned(),
                index,
            });
        }
        Ok(Self(SmolStr::new(text)))
    }

    /// The full text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment.
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.0)
    }

    /// Iterate over segments from left to right.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments (at least one).
    pub fn segment_count(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'.').count() + 1
    }

    /// The trailing `count` segments, borrowed from this name.
    ///
    /// `count` is clamped to `1..=segment_count()`, so `suffix(1)` is the
    /// simple name and anything past the segment count is the full name.
    pub fn suffix(&self, count: usize) -> &str {
        let text = self.0.as_str();
        match text.rmatch_indices('.').nth(count.max(1) - 1) {
            Some((dot, _)) => &text[dot + 1..],
            None => text,
        }
    }

    /// Whether `suffix` matches the tail of this name on a segment boundary.
    ///
    /// `a.bar.Baz` ends with `bar.Baz` and with `a.bar.Baz`, but not with
    /// `ar.Baz`.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        has_dot_suffix(&self.0, suffix)
    }
}

/// The text after the last `.`, or the whole text when there is none.
pub fn simple_name_of(text: &str) -> &str {
    text.rsplit('.').next().unwrap_or(text)
}

fn has_dot_suffix(text: &str, suffix: &str) -> bool {
    text.strip_suffix(suffix)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self.0)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for QualifiedName {
    type Error = NameError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl std::str::FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::new(text)
    }
}
