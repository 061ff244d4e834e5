//! Check coordinates against the configured filters

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use anyhow::bail;
use artifact_filter::core::models::Coordinate;
use artifact_filter::core::services::PatternFilter;
use artifact_filter::output::{CheckResult, Decision, OutputMode};

use crate::cli::CheckArgs;

/// Evaluate each coordinate against the includes filter, then the excludes filter
pub fn check(config_path: Option<&Path>, args: CheckArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = super::load_config(config_path, &args.patterns)?;
    let includes = config.includes_filter()?;
    let excludes = config.excludes_filter()?;
    let filters: Vec<&PatternFilter> = [includes.as_ref(), excludes.as_ref()].into_iter().flatten().collect();

    let coordinates = if args.coordinates.is_empty() {
        read_stdin()?
    } else {
        args.coordinates
    };

    let mut decisions = Vec::with_capacity(coordinates.len());
    for raw in &coordinates {
        let coordinate: Coordinate = raw.parse()?;

        let mut included = true;
        for filter in &filters {
            if !filter.include_with_trail(&coordinate, &args.trail)? {
                included = false;
                break;
            }
        }
        decisions.push(Decision {
            coordinate: coordinate.display_id(),
            included,
        });
    }

    for filter in &filters {
        filter.report_missed_criteria();
        filter.report_filtered();
    }

    let missed = filters.iter().any(|f| f.has_missed_criteria());
    let result = CheckResult {
        passed: !(args.strict && missed),
        decisions,
        filters: filters.iter().map(|f| f.report()).collect(),
    };
    result.render(mode);

    if !result.passed {
        bail!("some patterns never matched any coordinate");
    }
    Ok(())
}

/// Read coordinates from stdin, one per line, skipping blanks and `#` comments
fn read_stdin() -> anyhow::Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut coordinates = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            coordinates.push(line.to_string());
        }
    }
    Ok(coordinates)
}
