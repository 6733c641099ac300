//! Folding settings.
//!
//! Settings are a plain value handed to [`collect_conflict_groups`] and
//! [`fold_regions`]; nothing in this crate keeps a global copy. With the
//! `serde` feature enabled they can be stored as, for example:
//!
//! ```json
//! { "enabled": true, "threshold": 16 }
//! ```
//!
//! [`collect_conflict_groups`]: crate::fold::collect_conflict_groups
//! [`fold_regions`]: crate::fold::fold_regions

use std::fmt;

use thiserror::Error;

/// Names this long or shorter are left alone by default.
pub const DEFAULT_THRESHOLD: usize = 16;
/// Smallest accepted threshold.
pub const MIN_THRESHOLD: usize = 1;
/// Largest accepted threshold.
pub const MAX_THRESHOLD: usize = 200;

/// Why a threshold value was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("threshold cannot be empty")]
    EmptyThreshold,
    #[error("threshold `{0}` is not a valid number")]
    InvalidNumber(String),
    #[error("threshold must be at least 1, got {0}")]
    BelowMinimum(i64),
    #[error("threshold cannot exceed 200, got {0}")]
    AboveMaximum(i64),
}

// ============================================================================
// THRESHOLD
// ============================================================================

/// Minimum length (in characters) a qualified name must exceed to be folded.
///
/// Always within `MIN_THRESHOLD..=MAX_THRESHOLD`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct Threshold(usize);

impl Threshold {
    /// Validate a threshold.
    pub fn new(value: usize) -> Result<Self, SettingsError> {
        Self::checked(i64::try_from(value).unwrap_or(i64::MAX))
    }

    /// Parse user input, rejecting anything out of range.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, SettingsError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SettingsError::EmptyThreshold);
        }
        let value: i64 = input
            .parse()
            .map_err(|_| SettingsError::InvalidNumber(input.to_owned()))?;
        Self::checked(value)
    }

    /// Parse user input, clamping numbers into range and falling back to
    /// [`DEFAULT_THRESHOLD`] for anything that isn't a number.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(value) => Self(value.clamp(MIN_THRESHOLD as i64, MAX_THRESHOLD as i64) as usize),
            Err(_) => Self::default(),
        }
    }

    /// The threshold in characters.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    fn checked(value: i64) -> Result<Self, SettingsError> {
        if value < MIN_THRESHOLD as i64 {
            Err(SettingsError::BelowMinimum(value))
        } else if value > MAX_THRESHOLD as i64 {
            Err(SettingsError::AboveMaximum(value))
        } else {
            Ok(Self(value as usize))
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl fmt::Debug for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Threshold({})", self.0)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Threshold {
    type Error = SettingsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for usize {
    #[inline]
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Settings that decide which qualified names get folded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct FoldSettings {
    /// Master switch; when off nothing is folded.
    pub enabled: bool,
    /// Names must be longer than this to be folded.
    pub threshold: Threshold,
}

impl FoldSettings {
    /// Replace the threshold, validating it.
    pub fn with_threshold(self, threshold: usize) -> Result<Self, SettingsError> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            ..self
        })
    }

    /// Whether applying `other` would change what gets folded.
    pub fn differs_from(&self, other: &FoldSettings) -> bool {
        self.enabled != other.enabled || (self.enabled && self.threshold != other.threshold)
    }
}

impl Default for FoldSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: Threshold::default(),
        }
    }
}
