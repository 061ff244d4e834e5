//! Domain models for the filter engine
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Coordinate`] - The five-field identity a pattern is tested against
//! - [`ComparableVersion`] - Version ordering used by range matching
//! - [`VersionRange`] - Interval notation over versions
//! - [`Pattern`] - A compiled matching tree

mod coordinate;
mod pattern;
mod range;
mod version;

pub use coordinate::{Coordinate, Field, FieldSet};
pub use pattern::{CompiledPattern, FieldMatch, Pattern, TokenMatcher};
pub use range::{Restriction, VersionRange, version_in_range};
pub use version::ComparableVersion;
