//! Pattern filter - decides whether coordinates are accepted
//!
//! A [`PatternFilter`] compiles its raw patterns once and is then queried
//! many times. Patterns are tried in insertion order and the first one that
//! matches decides; a negative (`!`) pattern that matches rejects. When no
//! pattern matches the coordinate itself and the filter is transitive, the
//! ancestry trail is consulted entry by entry in the same way.
//!
//! An empty pattern set accepts every entity, whichever the flavour. With a
//! non-empty set and no match anywhere, the includes flavour rejects and the
//! excludes flavour accepts.
//!
//! The filter keeps statistics for its whole lifetime: which patterns ever
//! fired and which entities it rejected. They live in a `RefCell`, so a
//! filter is meant for single-threaded or externally synchronized use.

use std::cell::RefCell;
use std::collections::BTreeSet;

use log::{Level, debug, log_enabled, trace, warn};
use serde::Serialize;

use crate::core::error::FilterError;
use crate::core::models::{CompiledPattern, Coordinate};

use super::compiler::compile;

/// Which way a filter turns a pattern match into a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Matching entities are kept
    #[default]
    Includes,
    /// Matching entities are removed
    Excludes,
}

impl FilterKind {
    /// Human-readable name used in log messages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Includes => "artifact inclusion filter",
            Self::Excludes => "artifact exclusion filter",
        }
    }

    /// Heading used by [`PatternFilter::describe`]
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Includes => "Includes filter:",
            Self::Excludes => "Excludes filter:",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Includes => write!(f, "includes"),
            Self::Excludes => write!(f, "excludes"),
        }
    }
}

/// Accumulated evaluation statistics
#[derive(Debug, Default)]
struct Statistics {
    /// Indices of patterns that matched at least once
    triggered: BTreeSet<usize>,
    /// Display ids of rejected entities, in evaluation order
    rejected: Vec<String>,
}

/// A compiled set of patterns with a transitivity flag
#[derive(Debug)]
pub struct PatternFilter {
    kind: FilterKind,
    patterns: Vec<CompiledPattern>,
    transitive: bool,
    stats: RefCell<Statistics>,
}

impl PatternFilter {
    /// Compile a filter from raw pattern strings
    ///
    /// Identical patterns collapse into one; order is otherwise preserved.
    pub fn new<I, S>(kind: FilterKind, patterns: I, transitive: bool) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled: Vec<CompiledPattern> = Vec::new();
        for raw in patterns {
            let pattern = compile(raw.as_ref())?;
            if !compiled.contains(&pattern) {
                compiled.push(pattern);
            }
        }

        debug!(
            "built {} with {} pattern(s), transitive={transitive}",
            kind.description(),
            compiled.len()
        );

        Ok(Self {
            kind,
            patterns: compiled,
            transitive,
            stats: RefCell::new(Statistics::default()),
        })
    }

    /// Compile an includes filter
    pub fn includes<I, S>(patterns: I, transitive: bool) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(FilterKind::Includes, patterns, transitive)
    }

    /// Compile an excludes filter
    pub fn excludes<I, S>(patterns: I, transitive: bool) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(FilterKind::Excludes, patterns, transitive)
    }

    /// The filter flavour
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        self.kind
    }

    /// The compiled patterns, in insertion order
    #[must_use]
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Check if the ancestry trail is consulted
    #[must_use]
    pub const fn is_transitive(&self) -> bool {
        self.transitive
    }

    /// Decide a coordinate without ancestry
    pub fn include(&self, coordinate: &Coordinate) -> bool {
        let matched = self.first_match(coordinate);
        self.decide(coordinate, matched)
    }

    /// Decide a coordinate, falling back to its ancestry trail
    ///
    /// The trail runs from the root down to the entity itself, each entry in
    /// `group:id:type:version` or `group:id:type:classifier:version` form. It
    /// is only consulted on transitive filters and when it has more than one
    /// entry.
    pub fn include_with_trail<S: AsRef<str>>(
        &self,
        coordinate: &Coordinate,
        trail: &[S],
    ) -> Result<bool, FilterError> {
        let matched = match self.first_match(coordinate) {
            None => self.match_trail(trail)?,
            matched => matched,
        };
        Ok(self.decide(coordinate, matched))
    }

    /// Turn a pattern decision into the filter's verdict; `None` means nothing matched
    fn decide(&self, coordinate: &Coordinate, matched: Option<bool>) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let matched = matched.unwrap_or(false);
        let include = match self.kind {
            FilterKind::Includes => matched,
            FilterKind::Excludes => !matched,
        };
        if !include {
            self.stats.borrow_mut().rejected.push(coordinate.display_id());
        }
        include
    }

    /// First pattern to match decides: `Some(false)` for a negative pattern
    fn first_match(&self, coordinate: &Coordinate) -> Option<bool> {
        let (index, pattern) = self.patterns.iter().enumerate().find(|(_, p)| p.matches(coordinate))?;
        trace!("pattern '{pattern}' matched {coordinate}");
        self.stats.borrow_mut().triggered.insert(index);
        Some(!pattern.is_negative())
    }

    fn match_trail<S: AsRef<str>>(&self, trail: &[S]) -> Result<Option<bool>, FilterError> {
        if !self.transitive || trail.len() <= 1 {
            return Ok(None);
        }
        for entry in trail {
            let entry = entry.as_ref();
            let ancestor = Coordinate::parse(entry)
                .map_err(|_| FilterError::MalformedAncestryEntry(entry.to_string()))?;
            if let Some(matched) = self.first_match(&ancestor) {
                trace!("decided through ancestor {ancestor}");
                return Ok(Some(matched));
            }
        }
        Ok(None)
    }

    /// Raw strings of patterns that never matched anything
    #[must_use]
    pub fn missed_patterns(&self) -> Vec<String> {
        let stats = self.stats.borrow();
        self.patterns
            .iter()
            .enumerate()
            .filter(|(i, _)| !stats.triggered.contains(i))
            .map(|(_, p)| p.raw().to_string())
            .collect()
    }

    /// Check if any pattern never matched
    #[must_use]
    pub fn has_missed_criteria(&self) -> bool {
        self.stats.borrow().triggered.len() < self.patterns.len()
    }

    /// Display ids of rejected entities, in evaluation order
    #[must_use]
    pub fn rejected_entities(&self) -> Vec<String> {
        self.stats.borrow().rejected.clone()
    }

    /// Human-readable listing of the compiled patterns
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::from(self.kind.heading());
        for pattern in &self.patterns {
            out.push_str(&format!("\no '{pattern}'"));
        }
        out
    }

    /// Log a warning listing patterns that never matched
    pub fn report_missed_criteria(&self) {
        if self.patterns.is_empty() || !log_enabled!(Level::Warn) {
            return;
        }
        let missed = self.missed_patterns();
        if missed.is_empty() {
            return;
        }

        let mut message = format!(
            "The following patterns were never triggered in this {}:",
            self.kind.description()
        );
        for pattern in &missed {
            message.push_str(&format!("\no  '{pattern}'"));
        }
        message.push('\n');
        warn!("{message}");
    }

    /// Log at debug level the entities this filter removed
    pub fn report_filtered(&self) {
        let rejected = self.rejected_entities();
        if rejected.is_empty() || !log_enabled!(Level::Debug) {
            return;
        }

        let mut message =
            format!("The following artifacts were removed by this {}: ", self.kind.description());
        for id in &rejected {
            message.push('\n');
            message.push_str(id);
        }
        debug!("{message}");
    }

    /// Snapshot of the accumulated statistics
    #[must_use]
    pub fn report(&self) -> FilterReport {
        FilterReport {
            kind: self.kind,
            description: self.kind.description().to_string(),
            patterns: self.patterns.iter().map(|p| p.raw().to_string()).collect(),
            missed_patterns: self.missed_patterns(),
            rejected_entities: self.rejected_entities(),
        }
    }
}

impl std::fmt::Display for PatternFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Serializable snapshot of a filter's statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Filter flavour
    pub kind: FilterKind,
    /// Human-readable filter name
    pub description: String,
    /// Compiled patterns, raw form
    pub patterns: Vec<String>,
    /// Patterns that never matched
    pub missed_patterns: Vec<String>,
    /// Entities rejected so far
    pub rejected_entities: Vec<String>,
}
