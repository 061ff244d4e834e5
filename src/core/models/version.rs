//! Comparable versions
//!
//! Orders version strings the way artifact repositories do:
//!
//! - the string is split on `.`, `-` and on transitions between digits and letters
//! - numeric items compare numerically, without overflow
//! - qualifiers order `alpha < beta < milestone < rc (= cr) < snapshot < "" (= ga,
//!   final, release) < sp`; unknown qualifiers sort after `sp`, lexically
//! - `a1`, `b1`, `m1` are shorthand for `alpha-1`, `beta-1`, `milestone-1`
//! - trailing zero items are ignored, so `1 == 1.0 == 1.0.0`
//! - comparison is case-insensitive
//!
//! # Examples
//!
//! ```
//! use artifact_filter::core::models::ComparableVersion;
//!
//! let v = |s| ComparableVersion::new(s);
//! assert!(v("1.0-alpha-1") < v("1.0-SNAPSHOT"));
//! assert!(v("1.0-SNAPSHOT") < v("1.0"));
//! assert!(v("1.0") < v("1.0-sp"));
//! assert_eq!(v("1.0"), v("1.0.0"));
//! ```

use std::cmp::Ordering;

const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

/// Index of the release qualifier in [`QUALIFIERS`]
const RELEASE_INDEX: usize = 5;

/// One parsed item of a version
#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    /// Digits without leading zeros; empty means zero
    Int(String),
    /// Normalised qualifier
    Str(String),
    /// Sub-list introduced by `-` or a digit/letter transition
    List(Vec<Self>),
}

impl Item {
    fn int(digits: &str) -> Self {
        Self::Int(digits.trim_start_matches('0').to_string())
    }

    fn qualifier(value: &str, followed_by_digit: bool) -> Self {
        let value = if followed_by_digit && value.len() == 1 {
            match value {
                "a" => "alpha",
                "b" => "beta",
                "m" => "milestone",
                other => other,
            }
        } else {
            value
        };
        let value = match value {
            "ga" | "final" | "release" => "",
            "cr" => "rc",
            other => other,
        };
        Self::Str(value.to_string())
    }

    fn is_null(&self) -> bool {
        match self {
            Self::Int(digits) => digits.is_empty(),
            Self::Str(value) => value.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Sort key for a qualifier; known ones by rank, unknown ones after `sp`
    fn qualifier_key(value: &str) -> String {
        QUALIFIERS
            .iter()
            .position(|q| *q == value)
            .map_or_else(|| format!("{}-{value}", QUALIFIERS.len()), |i| i.to_string())
    }

    /// Compare against another item, `None` standing for a missing item
    fn compare(&self, other: Option<&Self>) -> Ordering {
        match (self, other) {
            (Self::Int(digits), None) => {
                if digits.is_empty() {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            },
            (Self::Int(a), Some(Self::Int(b))) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Int(_), Some(_)) => Ordering::Greater,

            (Self::Str(value), None) => {
                Self::qualifier_key(value).cmp(&RELEASE_INDEX.to_string())
            },
            (Self::Str(_), Some(Self::Int(_))) => Ordering::Less,
            (Self::Str(a), Some(Self::Str(b))) => {
                Self::qualifier_key(a).cmp(&Self::qualifier_key(b))
            },
            (Self::Str(_), Some(Self::List(_))) => Ordering::Less,

            (Self::List(items), None) => {
                items.first().map_or(Ordering::Equal, |first| first.compare(None))
            },
            (Self::List(_), Some(Self::Int(_))) => Ordering::Less,
            (Self::List(_), Some(Self::Str(_))) => Ordering::Greater,
            (Self::List(left), Some(Self::List(right))) => compare_lists(left, right),
        }
    }
}

fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {
    let len = left.len().max(right.len());
    for i in 0..len {
        let result = match (left.get(i), right.get(i)) {
            (None, None) => Ordering::Equal,
            (None, Some(r)) => r.compare(None).reverse(),
            (Some(l), r) => l.compare(r),
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Drop null items from the end, looking through nested lists, until the
/// first non-null plain item
fn normalize(items: &mut Vec<Item>) {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if items[i].is_null() {
            items.remove(i);
        } else if !matches!(items[i], Item::List(_)) {
            break;
        }
    }
}

/// A version string with artifact-repository ordering
#[derive(Debug, Clone)]
pub struct ComparableVersion {
    raw: String,
    items: Vec<Item>,
}

impl ComparableVersion {
    /// Parse a version string; every string is a valid version
    #[must_use]
    pub fn new(version: &str) -> Self {
        Self {
            raw: version.to_string(),
            items: parse(&version.to_lowercase()),
        }
    }

    /// The original version string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Split a lowercase version into nested items
///
/// Each `-` or digit/letter transition opens a sub-list that becomes the last
/// element of the current list, so the nesting is a single chain. The chain is
/// kept as a stack and folded back together at the end.
fn parse(version: &str) -> Vec<Item> {
    let chars: Vec<char> = version.chars().collect();
    let mut stack: Vec<Vec<Item>> = vec![Vec::new()];
    let mut is_digit = false;
    let mut start = 0;

    let token = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    let item = |digit: bool, text: &str| {
        if digit {
            Item::int(text)
        } else {
            Item::qualifier(text, false)
        }
    };

    for (i, &c) in chars.iter().enumerate() {
        let current = stack.len() - 1;
        match c {
            '.' | '-' => {
                if i == start {
                    stack[current].push(Item::Int(String::new()));
                } else {
                    stack[current].push(item(is_digit, &token(start, i)));
                }
                start = i + 1;
                if c == '-' {
                    stack.push(Vec::new());
                }
            },
            c if c.is_ascii_digit() => {
                if !is_digit && i > start {
                    stack[current].push(Item::qualifier(&token(start, i), true));
                    start = i;
                    stack.push(Vec::new());
                }
                is_digit = true;
            },
            _ => {
                if is_digit && i > start {
                    stack[current].push(Item::int(&token(start, i)));
                    start = i;
                    stack.push(Vec::new());
                }
                is_digit = false;
            },
        }
    }

    if chars.len() > start {
        let last = stack.len() - 1;
        stack[last].push(item(is_digit, &token(start, chars.len())));
    }

    let mut folded = stack.pop().unwrap_or_default();
    normalize(&mut folded);
    while let Some(mut parent) = stack.pop() {
        parent.push(Item::List(folded));
        normalize(&mut parent);
        folded = parent;
    }
    folded
}

impl PartialEq for ComparableVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ComparableVersion {}

impl PartialOrd for ComparableVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComparableVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_lists(&self.items, &other.items)
    }
}

impl std::fmt::Display for ComparableVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
