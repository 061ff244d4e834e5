//! Core domain logic for the filter engine
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Coordinate, Pattern, VersionRange)
//! - `services/` - Pattern compilation, wildcard matching and filtering
//! - `error` - The error taxonomy shared by both

pub mod error;
pub mod models;
pub mod services;

pub use error::FilterError;
