//! Filter services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`wildcard`] - Match `*`/`?` glob tokens against strings
//! - [`compiler`] - Compile raw pattern strings into pattern trees
//! - [`filter`] - Evaluate coordinates against a compiled pattern set

pub mod compiler;
pub mod filter;
pub mod wildcard;

pub use compiler::compile;
pub use filter::{FilterKind, FilterReport, PatternFilter};
