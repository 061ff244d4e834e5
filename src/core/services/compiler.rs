//! Pattern compiler - turns raw pattern strings into pattern trees
//!
//! # Grammar
//!
//! ```text
//! pattern      := "!"? segment (":" segment)*      // 1..5 segments
//! segment      := "" | "*" | literalWithWildcards | versionRange
//! versionRange := ("[" | "(") bound? "," bound? (")" | "]") ("," range)*
//! ```
//!
//! Empty segments read as `*`, so `::jar` keeps its positional meaning.
//!
//! # Token layout
//!
//! | tokens | fields |
//! |--------|--------|
//! | 1 | group |
//! | 2 | group, id |
//! | 3 | decided by which tokens are `*` (see `THREE_TOKENS`) |
//! | 4 | group, id, type, version-or-classifier |
//! | 5 | group, id, type, classifier, version |
//!
//! A `*` token adds no constraint.

use log::trace;

use crate::core::error::FilterError;
use crate::core::models::Field::{BaseVersion, Classifier, Group, Id, Type};
use crate::core::models::{CompiledPattern, Field, FieldMatch, FieldSet, Pattern};

const ANY: &str = "*";

/// How a token bound to several fields is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bind {
    /// One field match over the whole set
    Shared,
    /// An `Or` of single-field matches
    Either,
}

/// A token position bound to a field set
#[derive(Debug, Clone, Copy)]
struct Binding {
    token: usize,
    fields: FieldSet,
    bind: Bind,
}

const fn shared(token: usize, fields: &[Field]) -> Binding {
    Binding {
        token,
        fields: FieldSet::of(fields),
        bind: Bind::Shared,
    }
}

const fn either(token: usize, fields: &[Field]) -> Binding {
    Binding {
        token,
        fields: FieldSet::of(fields),
        bind: Bind::Either,
    }
}

static ONE_TOKEN: [Binding; 1] = [shared(0, &[Group])];

static TWO_TOKENS: [Binding; 2] = [shared(0, &[Group]), shared(1, &[Id])];

static FOUR_TOKENS: [Binding; 4] = [
    shared(0, &[Group]),
    shared(1, &[Id]),
    shared(2, &[Type]),
    shared(3, &[BaseVersion, Classifier]),
];

static FIVE_TOKENS: [Binding; 5] = [
    shared(0, &[Group]),
    shared(1, &[Id]),
    shared(2, &[Type]),
    shared(3, &[Classifier]),
    shared(4, &[BaseVersion]),
];

/// Three-token decision table, keyed by wildcard mask
///
/// Bit `i` of the mask is set when token `i` is `*`.
static THREE_TOKENS: [(u8, &[Binding]); 8] = [
    // *:*:*
    (0b111, &[]),
    // *:*:x
    (0b011, &[either(2, &[Type, Classifier])]),
    // *:x:*
    (0b101, &[either(1, &[Id, Type])]),
    // *:x:y
    (0b001, &[either(1, &[Group, Id]), either(2, &[Type, Classifier])]),
    // x:*:*
    (0b110, &[either(0, &[Group, Id])]),
    // x:*:y
    (0b010, &[shared(0, &[Group]), either(2, &[Type, Classifier])]),
    // x:y:*
    (0b100, &[shared(0, &[Group]), shared(1, &[Id])]),
    // x:y:z
    (0b000, &[shared(0, &[Group]), shared(1, &[Id]), shared(2, &[Type])]),
];

/// Compile a raw pattern string
///
/// # Examples
///
/// ```
/// use artifact_filter::core::models::Coordinate;
/// use artifact_filter::core::services::compile;
///
/// let p = compile("org.example:*:jar").unwrap();
/// assert!(p.matches(&Coordinate::new("org.example", "core", "jar", "1.0")));
/// assert_eq!(p.to_string(), "org.example:*:jar");
/// ```
pub fn compile(raw: &str) -> Result<CompiledPattern, FilterError> {
    let root = compile_tree(raw, raw)?;
    trace!("compiled pattern '{raw}' as {root:?}");
    Ok(CompiledPattern::new(raw, root))
}

fn compile_tree(raw: &str, full: &str) -> Result<Pattern, FilterError> {
    if let Some(rest) = raw.strip_prefix('!') {
        return Ok(Pattern::Not(Box::new(compile_tree(rest, full)?)));
    }

    let tokens = tokenize(raw);
    let bindings = layout(&tokens).ok_or_else(|| {
        FilterError::invalid_pattern(
            full,
            format!("expected 1 to 5 ':'-separated tokens, found {}", tokens.len()),
        )
    })?;

    let mut parts = Vec::with_capacity(bindings.len());
    for binding in bindings {
        let token = tokens[binding.token];
        if token == ANY {
            continue;
        }
        parts.push(bind(token, binding).map_err(|err| match err {
            FilterError::InvalidVersionRange { .. } => {
                FilterError::invalid_pattern(full, err.to_string())
            },
            other => other,
        })?);
    }

    Ok(Pattern::all_of(parts))
}

/// Split on `:`, empty tokens becoming `*`; an empty pattern has no tokens
fn tokenize(raw: &str) -> Vec<&str> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(':').map(|t| if t.is_empty() { ANY } else { t }).collect()
}

/// Pick the field layout for a token list
fn layout(tokens: &[&str]) -> Option<&'static [Binding]> {
    match tokens.len() {
        1 => Some(&ONE_TOKEN[..]),
        2 => Some(&TWO_TOKENS[..]),
        3 => {
            let mask = wildcard_mask(tokens);
            THREE_TOKENS.iter().find(|(m, _)| *m == mask).map(|(_, bindings)| *bindings)
        },
        4 => Some(&FOUR_TOKENS[..]),
        5 => Some(&FIVE_TOKENS[..]),
        _ => None,
    }
}

fn wildcard_mask(tokens: &[&str]) -> u8 {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == ANY)
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

fn bind(token: &str, binding: &Binding) -> Result<Pattern, FilterError> {
    match binding.bind {
        Bind::Shared => Ok(Pattern::Field(FieldMatch::new(token, binding.fields)?)),
        Bind::Either => {
            let parts = binding
                .fields
                .iter()
                .map(|field| {
                    FieldMatch::new(token, FieldSet::empty().with(field)).map(Pattern::Field)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Pattern::any_of(parts))
        },
    }
}
