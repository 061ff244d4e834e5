//! Version range intervals
//!
//! Interval notation as used in artifact version specs:
//!
//! ```text
//! [1.0,2.0)        1.0 <= v < 2.0
//! [1.0]            exactly 1.0
//! (,1.0]           v <= 1.0
//! (,1.0],[1.2,)    v <= 1.0 or v >= 1.2
//! ```
//!
//! Malformed specs are rejected at parse time.

use crate::core::error::FilterError;

use super::version::ComparableVersion;

/// One interval of a range, bounds optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    lower: Option<ComparableVersion>,
    lower_inclusive: bool,
    upper: Option<ComparableVersion>,
    upper_inclusive: bool,
}

impl Restriction {
    /// Parse one bracketed interval such as `[1.0,2.0)`
    fn parse(spec: &str, full: &str) -> Result<Self, FilterError> {
        let lower_inclusive = spec.starts_with('[');
        let upper_inclusive = spec.ends_with(']');
        let inner = spec[1..spec.len() - 1].trim();

        let Some((lower, upper)) = inner.split_once(',') else {
            if !lower_inclusive || !upper_inclusive {
                return Err(FilterError::invalid_range(
                    full,
                    format!("single version must be surrounded by []: {spec}"),
                ));
            }
            if inner.is_empty() {
                return Err(FilterError::invalid_range(full, "empty version in []"));
            }
            let version = ComparableVersion::new(inner);
            return Ok(Self {
                lower: Some(version.clone()),
                lower_inclusive,
                upper: Some(version),
                upper_inclusive,
            });
        };

        if upper.contains(',') {
            return Err(FilterError::invalid_range(full, format!("too many bounds in {spec}")));
        }

        let bound = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| ComparableVersion::new(s))
        };
        let lower = bound(lower);
        let upper = bound(upper);

        if let (Some(lo), Some(hi)) = (&lower, &upper) {
            if hi < lo {
                return Err(FilterError::invalid_range(
                    full,
                    format!("range defies version ordering: {spec}"),
                ));
            }
            if hi == lo && (!lower_inclusive || !upper_inclusive) {
                return Err(FilterError::invalid_range(full, format!("empty range: {spec}")));
            }
        }

        Ok(Self {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        })
    }

    /// Check if a version lies within this interval
    #[must_use]
    pub fn contains(&self, version: &ComparableVersion) -> bool {
        if let Some(lower) = &self.lower {
            match lower.cmp(version) {
                std::cmp::Ordering::Greater => return false,
                std::cmp::Ordering::Equal if !self.lower_inclusive => return false,
                _ => {},
            }
        }
        if let Some(upper) = &self.upper {
            match upper.cmp(version) {
                std::cmp::Ordering::Less => return false,
                std::cmp::Ordering::Equal if !self.upper_inclusive => return false,
                _ => {},
            }
        }
        true
    }
}

/// A union of intervals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    spec: String,
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    /// Parse a range spec; it must start with `[` or `(`
    pub fn parse(spec: &str) -> Result<Self, FilterError> {
        let mut process = spec.trim();
        if !process.starts_with(['[', '(']) {
            return Err(FilterError::invalid_range(spec, "range must start with [ or ("));
        }

        let mut restrictions: Vec<Restriction> = Vec::new();
        let mut previous_upper: Option<ComparableVersion> = None;

        while process.starts_with(['[', '(']) {
            let Some(close) = process.find([')', ']']) else {
                return Err(FilterError::invalid_range(spec, "unbounded range"));
            };

            let restriction = Restriction::parse(&process[..=close], spec)?;
            if !restrictions.is_empty() {
                let overlaps = match (&restriction.lower, &previous_upper) {
                    (Some(lower), Some(upper)) => lower < upper,
                    _ => true,
                };
                if overlaps {
                    return Err(FilterError::invalid_range(spec, "ranges overlap"));
                }
            }
            previous_upper.clone_from(&restriction.upper);
            restrictions.push(restriction);

            process = process[close + 1..].trim();
            if let Some(rest) = process.strip_prefix(',') {
                process = rest.trim();
            }
        }

        if !process.is_empty() {
            return Err(FilterError::invalid_range(
                spec,
                format!("only fully-qualified sets allowed in multiple set scenario: {process}"),
            ));
        }

        Ok(Self {
            spec: spec.to_string(),
            restrictions,
        })
    }

    /// Check if a version lies within any interval of the range
    #[must_use]
    pub fn contains(&self, version: &ComparableVersion) -> bool {
        self.restrictions.iter().any(|r| r.contains(version))
    }

    /// Convenience: check a raw version string
    #[must_use]
    pub fn contains_str(&self, version: &str) -> bool {
        self.contains(&ComparableVersion::new(version))
    }

    /// The intervals making up this range
    #[must_use]
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spec)
    }
}

impl std::str::FromStr for VersionRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check if `version` lies within the interval spec `range_spec`
pub fn version_in_range(version: &str, range_spec: &str) -> Result<bool, FilterError> {
    Ok(VersionRange::parse(range_spec)?.contains_str(version))
}
