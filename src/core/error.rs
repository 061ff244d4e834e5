//! Error types for pattern compilation and coordinate evaluation

use thiserror::Error;

/// Errors raised by the filter engine
///
/// Every failure is a deterministic function of its input and is surfaced
/// synchronously to the caller. Matching itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A raw pattern string could not be compiled
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The raw pattern as supplied by the caller
        pattern: String,
        /// What was wrong with it
        reason: String,
    },

    /// A version range literal did not parse
    #[error("invalid version range '{spec}': {reason}")]
    InvalidVersionRange {
        /// The range literal
        spec: String,
        /// What was wrong with it
        reason: String,
    },

    /// A coordinate string did not have 4 or 5 colon-separated segments
    #[error("invalid coordinate '{0}': expected group:id:type[:classifier]:version")]
    InvalidCoordinate(String),

    /// An ancestry entry did not have 4 or 5 colon-separated segments
    #[error("malformed ancestry entry: {0}")]
    MalformedAncestryEntry(String),
}

impl FilterError {
    /// Create an invalid pattern error
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid version range error
    #[must_use]
    pub fn invalid_range(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersionRange {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}
