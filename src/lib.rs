//! artifact-filter - Pattern-based include/exclude filtering of artifact coordinates
//!
//! This library decides whether a coordinate (`group:id:type[:classifier]:version`)
//! is accepted by a set of glob-like patterns, optionally consulting the
//! coordinate's ancestry trail, and reports which patterns never fired.
//!
//! ```
//! use artifact_filter::core::models::Coordinate;
//! use artifact_filter::core::services::PatternFilter;
//!
//! let filter = PatternFilter::includes(["org.example:*:jar"], false).unwrap();
//! assert!(filter.include(&Coordinate::new("org.example", "core", "jar", "1.0")));
//! assert!(!filter.include(&Coordinate::new("org.other", "core", "jar", "1.0")));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;

pub use crate::core::error::FilterError;
pub use crate::core::models::Coordinate;
pub use crate::core::services::{FilterKind, PatternFilter, compile};
