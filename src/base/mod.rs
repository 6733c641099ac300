//! Foundation types for qualified-name folding.
//!
//! - [`QualifiedName`] - validated dotted identifier with suffix helpers
//! - [`TextRange`], [`TextSize`] - source positions of candidate sites
//!
//! This module has NO dependencies on other fqnfold modules.

mod name;

pub use name::{NameError, QualifiedName, simple_name_of};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
