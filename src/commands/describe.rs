//! Describe the configured filters

use std::path::Path;

use artifact_filter::core::services::PatternFilter;
use artifact_filter::output::{DescribeResult, OutputMode};

use crate::cli::PatternArgs;

/// Print the compiled include and exclude filters
pub fn describe(
    config_path: Option<&Path>,
    patterns: &PatternArgs,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path, patterns)?;

    let filters = [config.includes_filter()?, config.excludes_filter()?]
        .into_iter()
        .flatten()
        .map(|filter| PatternFilter::describe(&filter))
        .collect();

    let result = DescribeResult {
        filters,
        transitive: config.filter.transitive,
    };
    result.render(mode);
    Ok(())
}
