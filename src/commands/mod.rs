//! Command implementations

mod check;
mod describe;

pub use check::check;
pub use describe::describe;

use std::path::Path;

use artifact_filter::config::FilterConfig;

use crate::cli::PatternArgs;

/// Load the config and add command-line patterns to it
fn load_config(path: Option<&Path>, patterns: &PatternArgs) -> anyhow::Result<FilterConfig> {
    let cwd = std::env::current_dir()?;
    let mut config = FilterConfig::discover(path, &cwd)?;
    config.merge_cli(&patterns.include, &patterns.exclude, patterns.transitive);
    Ok(config)
}
