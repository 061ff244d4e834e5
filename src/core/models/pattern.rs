//! Compiled coordinate patterns
//!
//! A [`Pattern`] is an immutable tree evaluated against a [`Coordinate`].
//! It is produced by [`crate::core::services::compile`] and wrapped in a
//! [`CompiledPattern`] that remembers the raw string it came from.

use crate::core::error::FilterError;
use crate::core::services::wildcard;

use super::coordinate::{Coordinate, Field, FieldSet};
use super::range::VersionRange;

/// How a single token is compared against a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMatcher {
    /// Exact, case-sensitive equality
    Literal(String),
    /// Glob with `*` and/or `?`
    Wildcard(String),
    /// Version interval, only ever bound to the base version alone
    Range(VersionRange),
}

impl TokenMatcher {
    /// Choose a matcher for `token` bound to `fields`
    ///
    /// A wildcard-free token bound to the base version alone that starts with
    /// `[` or `(` is a version range and must parse as one.
    pub fn new(token: &str, fields: FieldSet) -> Result<Self, FilterError> {
        if wildcard::has_wildcard(token) {
            Ok(Self::Wildcard(token.to_string()))
        } else if fields.is_only(Field::BaseVersion) && token.starts_with(['[', '(']) {
            Ok(Self::Range(VersionRange::parse(token)?))
        } else {
            Ok(Self::Literal(token.to_string()))
        }
    }

    /// Check a single field value
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Literal(token) => token == value,
            Self::Wildcard(token) => wildcard::matches(token, value),
            Self::Range(range) => range.contains_str(value),
        }
    }
}

impl std::fmt::Display for TokenMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(token) | Self::Wildcard(token) => write!(f, "{token}"),
            Self::Range(range) => write!(f, "{range}"),
        }
    }
}

/// A token bound to one or more coordinate fields
///
/// Matches when any of the bound fields is present and matches the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    matcher: TokenMatcher,
    fields: FieldSet,
}

impl FieldMatch {
    /// Bind a token to a set of fields
    pub fn new(token: &str, fields: FieldSet) -> Result<Self, FilterError> {
        Ok(Self {
            matcher: TokenMatcher::new(token, fields)?,
            fields,
        })
    }

    /// The token matcher
    #[must_use]
    pub const fn matcher(&self) -> &TokenMatcher {
        &self.matcher
    }

    /// The fields this token is bound to
    #[must_use]
    pub const fn fields(&self) -> FieldSet {
        self.fields
    }

    /// Check the coordinate; absent fields never match
    #[must_use]
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        self.fields
            .iter()
            .any(|field| coordinate.get(field).is_some_and(|value| self.matcher.matches(value)))
    }
}

/// A compiled matching unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A token bound to a field set
    Field(FieldMatch),
    /// Accepts every coordinate
    All,
    /// Every child must match
    And(Vec<Self>),
    /// Any child may match
    Or(Vec<Self>),
    /// Reports the inner match unchanged; the filter inverts the decision
    Not(Box<Self>),
}

impl Pattern {
    /// Combine constraints: none is `All`, one is itself, more is `And`
    #[must_use]
    pub fn all_of(mut parts: Vec<Self>) -> Self {
        match parts.len() {
            0 => Self::All,
            1 => parts.remove(0),
            _ => Self::And(parts),
        }
    }

    /// Combine alternatives: one is itself, more is `Or`
    #[must_use]
    pub fn any_of(mut parts: Vec<Self>) -> Self {
        match parts.len() {
            0 => Self::All,
            1 => parts.remove(0),
            _ => Self::Or(parts),
        }
    }

    /// Check if the pattern matches a coordinate
    ///
    /// A `Not` pattern reports whether its inner pattern matched, so that
    /// trigger bookkeeping stays accurate.
    #[must_use]
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        match self {
            Self::Field(field) => field.matches(coordinate),
            Self::All => true,
            Self::And(parts) => parts.iter().all(|p| p.matches(coordinate)),
            Self::Or(parts) => parts.iter().any(|p| p.matches(coordinate)),
            Self::Not(inner) => inner.matches(coordinate),
        }
    }

    /// Check if a match of this pattern rejects
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self, Self::Not(_))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{}", field.matcher),
            Self::All => write!(f, "*"),
            Self::And(parts) => {
                let parts: Vec<String> = parts.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(":"))
            },
            Self::Or(parts) => {
                let mut shown: Vec<String> = Vec::new();
                for part in parts.iter().map(ToString::to_string) {
                    if !shown.contains(&part) {
                        shown.push(part);
                    }
                }
                write!(f, "{}", shown.join("|"))
            },
            Self::Not(inner) => write!(f, "!{inner}"),
        }
    }
}

/// A pattern together with the raw string it was compiled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    raw: String,
    root: Pattern,
}

impl CompiledPattern {
    /// Wrap a compiled tree
    #[must_use]
    pub fn new(raw: impl Into<String>, root: Pattern) -> Self {
        Self {
            raw: raw.into(),
            root,
        }
    }

    /// The raw pattern string
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The compiled tree
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.root
    }

    /// Check if the pattern matches a coordinate
    #[must_use]
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        self.root.matches(coordinate)
    }

    /// Check if a match of this pattern rejects
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.root.is_negative()
    }
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
