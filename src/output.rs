//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::FilterReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// The decision for one coordinate
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    /// Display id of the coordinate
    pub coordinate: String,
    /// Whether every filter accepted it
    pub included: bool,
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// False when `--strict` was requested and some pattern never matched
    pub passed: bool,
    /// Per-coordinate decisions, in input order
    pub decisions: Vec<Decision>,
    /// Statistics of each filter that took part
    pub filters: Vec<FilterReport>,
}

impl CheckResult {
    /// Number of coordinates that were kept
    #[must_use]
    pub fn included_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.included).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.decisions.is_empty() {
            println!("No coordinates to check.");
            return;
        }

        for d in &self.decisions {
            if d.included {
                println!("  {} {}", "included".green(), d.coordinate);
            } else {
                println!("  {} {}", "excluded".red(), d.coordinate);
            }
        }
        println!(
            "\n{} of {} coordinate(s) included",
            self.included_count(),
            self.decisions.len()
        );

        for report in &self.filters {
            if report.missed_patterns.is_empty() {
                continue;
            }
            println!("\nPatterns never triggered in this {}:", report.description);
            for pattern in &report.missed_patterns {
                println!("  o '{}'", pattern.yellow());
            }
        }

        if !self.passed {
            println!("\n{}", "FAILED: some patterns never matched".red().bold());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a describe operation
#[derive(Debug, Serialize)]
pub struct DescribeResult {
    /// Filter listings, one per configured filter
    pub filters: Vec<String>,
    /// Whether ancestry trails are consulted
    pub transitive: bool,
}

impl DescribeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.filters.is_empty() {
            println!("No patterns configured.");
            return;
        }
        for description in &self.filters {
            println!("{description}");
        }
        if self.transitive {
            println!("\n(transitive)");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
