//! Tests for the pattern compiler
//!
//! Checks the shape of compiled trees and compile-time errors.

use artifact_filter::FilterError;
use artifact_filter::core::models::{Coordinate, Field, Pattern, TokenMatcher};
use artifact_filter::core::services::compile;

// =============================================================================
// Tree Shape
// =============================================================================

#[test]
fn wildcards_contribute_nothing() {
    let p = compile("*:*:*:*:*").unwrap();
    assert_eq!(p.pattern(), &Pattern::All);
    assert!(p.matches(&Coordinate::default()));
}

#[test]
fn one_token_binds_group() {
    let p = compile("org.example").unwrap();
    let Pattern::Field(field) = p.pattern() else {
        panic!("expected a field match, got {:?}", p.pattern());
    };
    assert!(field.fields().is_only(Field::Group));
    assert_eq!(field.matcher(), &TokenMatcher::Literal("org.example".to_string()));
}

#[test]
fn ambiguous_three_token_binding_is_an_or() {
    let p = compile("x:*:*").unwrap();
    let Pattern::Or(parts) = p.pattern() else {
        panic!("expected an or, got {:?}", p.pattern());
    };
    assert_eq!(parts.len(), 2);
}

#[test]
fn fully_specified_is_an_and() {
    let p = compile("g:a:jar:tests:1.0").unwrap();
    let Pattern::And(parts) = p.pattern() else {
        panic!("expected an and, got {:?}", p.pattern());
    };
    assert_eq!(parts.len(), 5);
}

#[test]
fn range_only_on_version_token() {
    let p = compile("g:a:jar:*:[1.0,2.0)").unwrap();
    let Pattern::And(parts) = p.pattern() else {
        panic!("expected an and, got {:?}", p.pattern());
    };
    let Some(Pattern::Field(version)) = parts.last() else {
        panic!("expected a trailing field match");
    };
    assert!(matches!(version.matcher(), TokenMatcher::Range(_)));

    // Four tokens bind the last one to version or classifier, so no range
    let p = compile("g:a:jar:[1.0]").unwrap();
    assert!(p.matches(&Coordinate::new("g", "a", "jar", "[1.0]")));
    assert!(!p.matches(&Coordinate::new("g", "a", "jar", "1.0")));
}

#[test]
fn wildcard_wins_over_range_syntax() {
    let p = compile("g:a:jar:*:[1.*").unwrap();
    assert!(p.matches(&Coordinate::new("g", "a", "jar", "[1.5")));
}

#[test]
fn raw_string_survives_restructuring() {
    for raw in ["::jar", "!g:*", "g:a:jar::1.0", "*"] {
        let p = compile(raw).unwrap();
        assert_eq!(p.raw(), raw);
        assert_eq!(p.to_string(), raw);
    }
}

#[test]
fn tree_display() {
    assert_eq!(compile("g:a:jar").unwrap().pattern().to_string(), "g:a:jar");
    assert_eq!(compile("x:*:*").unwrap().pattern().to_string(), "x");
    assert_eq!(compile("!g").unwrap().pattern().to_string(), "!g");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn token_count_out_of_range() {
    for raw in ["", "!", "a:b:c:d:e:f", "::::::"] {
        let err = compile(raw).unwrap_err();
        assert!(matches!(err, FilterError::InvalidPattern { .. }), "{raw}: {err}");
    }
}

#[test]
fn unparsable_range() {
    for raw in ["g:a:jar:*:[1.0,2.0", "g:a:jar:*:(1.0]", "g:a:jar:*:[2.0,1.0]", "g:a:jar:*:[]"] {
        let err = compile(raw).unwrap_err();
        let FilterError::InvalidPattern { pattern, reason } = err else {
            panic!("{raw}: unexpected error {err}");
        };
        assert_eq!(pattern, raw);
        assert!(reason.contains("invalid version range"), "{reason}");
    }
}

#[test]
fn error_message_names_pattern() {
    let err = compile("a:b:c:d:e:f").unwrap_err();
    assert!(err.to_string().starts_with("invalid pattern 'a:b:c:d:e:f'"));
}
