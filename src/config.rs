//! Filter configuration
//!
//! Patterns can be kept in a TOML file, by default `.artifact-filter.toml`
//! in the working directory:
//!
//! ```toml
//! [filter]
//! transitive = true
//! includes = ["org.example:*"]
//! excludes = ["*:*:*:tests:*"]
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::FilterError;
use crate::core::services::PatternFilter;

/// Default configuration filename
pub const CONFIG_FILE: &str = ".artifact-filter.toml";

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Filter settings
    #[serde(default)]
    pub filter: FilterSection,
}

/// The `[filter]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSection {
    /// Consult ancestry trails when a coordinate does not match directly
    #[serde(default)]
    pub transitive: bool,
    /// Patterns an entity must match to be kept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    /// Patterns that remove an entity when matched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

impl FilterConfig {
    /// Path of the default config file in `dir`
    #[must_use]
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Parse a config document
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `path` if given, else the default file in `dir` if it exists,
    /// else an empty config
    pub fn discover(path: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = Self::default_path(dir);
        if default.exists() {
            log::debug!("loading {}", default.display());
            Self::load(&default)
        } else {
            Ok(Self::default())
        }
    }

    /// Append command-line patterns; `transitive` turns the flag on, never off
    pub fn merge_cli(&mut self, includes: &[String], excludes: &[String], transitive: bool) {
        self.filter.includes.extend_from_slice(includes);
        self.filter.excludes.extend_from_slice(excludes);
        self.filter.transitive |= transitive;
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the includes filter, `None` when there are no include patterns
    pub fn includes_filter(&self) -> Result<Option<PatternFilter>, FilterError> {
        if self.filter.includes.is_empty() {
            return Ok(None);
        }
        PatternFilter::includes(&self.filter.includes, self.filter.transitive).map(Some)
    }

    /// Build the excludes filter, `None` when there are no exclude patterns
    pub fn excludes_filter(&self) -> Result<Option<PatternFilter>, FilterError> {
        if self.filter.excludes.is_empty() {
            return Ok(None);
        }
        PatternFilter::excludes(&self.filter.excludes, self.filter.transitive).map(Some)
    }
}
