//! Tests for the pattern filter
//!
//! Covers decision rules, ancestry fallback and statistics.

use artifact_filter::core::models::Coordinate;
use artifact_filter::core::services::{FilterKind, PatternFilter};
use artifact_filter::FilterError;

fn artifact() -> Coordinate {
    Coordinate::new("group", "artifact", "jar", "version")
}

fn other() -> Coordinate {
    Coordinate::new("otherGroup", "otherArtifact", "ejb", "version")
}

// =============================================================================
// Decision Scenarios
// =============================================================================

#[test]
fn includes_when_id_and_group_match() {
    let filter = PatternFilter::includes(["group:artifact:*"], false).unwrap();
    assert!(filter.include(&artifact()));
}

#[test]
fn excludes_when_group_differs() {
    let filter = PatternFilter::includes(["otherGroup:artifact:jar"], false).unwrap();
    assert!(!filter.include(&artifact()));
}

#[test]
fn transitive_without_ancestry_falls_back_to_reject() {
    let filter = PatternFilter::includes(["*:jar:*"], true).unwrap();
    let no_trail: [&str; 0] = [];
    assert_eq!(filter.include_with_trail(&other(), &no_trail), Ok(false));
}

#[test]
fn version_range_bounds() {
    let filter = PatternFilter::includes(
        ["com.mycompany.myproject:some-artifact-id:jar:*:[1.0,2.0)"],
        false,
    )
    .unwrap();
    let at = |v: &str| Coordinate::new("com.mycompany.myproject", "some-artifact-id", "jar", v);

    assert!(filter.include(&at("1.0")));
    assert!(filter.include(&at("1.1")));
    assert!(filter.include(&at("1.99-SNAPSHOT")));
    assert!(!filter.include(&at("2.0")));
    assert!(!filter.include(&at("0.9")));
}

#[test]
fn negative_pattern_rejects_its_match() {
    let filter = PatternFilter::includes(["!group:artifact:jar"], false).unwrap();
    assert!(!filter.include(&artifact()));
    assert!(!filter.has_missed_criteria());
}

// A sole negative pattern does not turn the default into accept.
#[test]
fn single_negative_pattern_rejects_unmatched() {
    let filter = PatternFilter::includes(["!group:artifact:jar"], false).unwrap();
    assert!(!filter.include(&other()));
    assert_eq!(filter.missed_patterns(), vec!["!group:artifact:jar".to_string()]);
}

#[test]
fn single_negative_pattern_in_excludes_filter_keeps_both() {
    let filter = PatternFilter::excludes(["!group:artifact:jar"], false).unwrap();
    assert!(filter.include(&artifact()));
    assert!(filter.include(&other()));
    assert!(filter.rejected_entities().is_empty());
}

#[test]
fn negative_then_catch_all_accepts_the_rest() {
    let filter = PatternFilter::includes(["!group:artifact", "*"], false).unwrap();
    assert!(!filter.include(&artifact()));
    assert!(filter.include(&other()));
}

#[test]
fn order_decides_between_overlapping_patterns() {
    let accept_first = PatternFilter::includes(["group", "!group:artifact"], false).unwrap();
    assert!(accept_first.include(&artifact()));
    assert_eq!(accept_first.missed_patterns(), vec!["!group:artifact".to_string()]);

    let reject_first = PatternFilter::includes(["!group:artifact", "group"], false).unwrap();
    assert!(!reject_first.include(&artifact()));
}

#[test]
fn empty_includes_accepts_everything() {
    let filter = PatternFilter::includes(Vec::<String>::new(), true).unwrap();
    assert!(filter.include(&artifact()));
    assert!(filter.include(&other()));
    assert!(!filter.has_missed_criteria());
}

#[test]
fn empty_excludes_accepts_everything() {
    let filter = PatternFilter::excludes(Vec::<String>::new(), true).unwrap();
    assert!(filter.include(&artifact()));
    assert!(filter.include(&other()));
    let trail = ["current:project:jar:1.0", "group:artifact:jar:version"];
    assert_eq!(filter.include_with_trail(&artifact(), &trail), Ok(true));
    assert!(filter.rejected_entities().is_empty());
    assert!(!filter.has_missed_criteria());
}

#[test]
fn unmatched_excludes_accepts() {
    let filter = PatternFilter::excludes(["nothing"], false).unwrap();
    assert!(filter.include(&artifact()));
    assert!(filter.rejected_entities().is_empty());
}

#[test]
fn classifier_patterns() {
    let tests = Coordinate::new("group", "artifact", "jar", "1.0").with_classifier("tests");
    let filter = PatternFilter::includes(["group:artifact:jar:tests:*"], false).unwrap();
    assert!(filter.include(&tests));
    assert!(!filter.include(&artifact()));
}

#[test]
fn absent_classifier_never_matches_a_wildcard() {
    let filter = PatternFilter::includes(["*:*:*:?*:*"], false).unwrap();
    assert!(!filter.include(&artifact()));
}

#[test]
fn four_tokens_match_version_or_classifier() {
    let filter = PatternFilter::includes(["group:artifact:jar:version"], false).unwrap();
    assert!(filter.include(&artifact()));

    let filter = PatternFilter::includes(["group:artifact:jar:tests"], false).unwrap();
    let tests = Coordinate::new("group", "artifact", "jar", "1.0").with_classifier("tests");
    assert!(filter.include(&tests));
    assert!(!filter.include(&artifact()));
}

// =============================================================================
// Ancestry
// =============================================================================

#[test]
fn ancestry_match_includes_transitively() {
    let filter = PatternFilter::includes(["current:project"], true).unwrap();
    let trail = ["current:project:jar:1.0", "group:artifact:jar:version"];
    assert_eq!(filter.include_with_trail(&artifact(), &trail), Ok(true));
    assert!(!filter.has_missed_criteria());
}

#[test]
fn negative_ancestry_match_rejects() {
    let filter = PatternFilter::includes(["!current:project", "*:*:war"], true).unwrap();
    let trail = ["current:project:jar:1.0", "group:artifact:jar:version"];
    assert_eq!(filter.include_with_trail(&artifact(), &trail), Ok(false));
}

#[test]
fn direct_match_skips_the_trail() {
    let filter = PatternFilter::includes(["group"], true).unwrap();
    // The malformed entry would fail if the trail were parsed.
    assert_eq!(filter.include_with_trail(&artifact(), &["x", "y"]), Ok(true));
}

#[test]
fn five_segment_trail_entries() {
    let filter = PatternFilter::includes(["*:*:*:tests:*"], true).unwrap();
    let trail = ["root:app:jar:tests:1.0", "group:artifact:jar:version"];
    assert_eq!(filter.include_with_trail(&artifact(), &trail), Ok(true));
}

#[test]
fn malformed_trail_entry_is_an_error() {
    let filter = PatternFilter::includes(["nothing"], true).unwrap();
    let err = filter
        .include_with_trail(&artifact(), &["a:b:c:d:e:f", "group:artifact:jar:version"])
        .unwrap_err();
    assert_eq!(err, FilterError::MalformedAncestryEntry("a:b:c:d:e:f".to_string()));
}

#[test]
fn coordinate_parse_error_names_the_coordinate() {
    let err = Coordinate::parse("g:a").unwrap_err();
    assert_eq!(err, FilterError::InvalidCoordinate("g:a".to_string()));
}

#[test]
fn invalid_pattern_fails_construction() {
    let err = PatternFilter::includes(["group", "a:b:c:d:e:f"], false).unwrap_err();
    assert!(matches!(err, FilterError::InvalidPattern { ref pattern, .. } if pattern == "a:b:c:d:e:f"));

    let err = PatternFilter::includes(["g:a:jar:*:[2.0,1.0]"], false).unwrap_err();
    assert!(matches!(err, FilterError::InvalidPattern { .. }));
}

// =============================================================================
// Statistics and Reporting
// =============================================================================

#[test]
fn statistics_accumulate_across_calls() {
    let filter = PatternFilter::includes(["group", "otherGroup", "unused"], false).unwrap();
    assert!(filter.include(&artifact()));
    assert_eq!(filter.missed_patterns().len(), 2);
    assert!(filter.include(&other()));
    assert_eq!(filter.missed_patterns(), vec!["unused".to_string()]);
    assert!(filter.has_missed_criteria());
}

// Equivalent spellings stay separate so each raw string is reported as written.
#[test]
fn equivalent_spellings_are_kept_apart() {
    let filter = PatternFilter::includes(["group:artifact", "group:artifact:*"], false).unwrap();
    assert_eq!(filter.patterns().len(), 2);
    assert_eq!(filter.patterns()[0].pattern(), filter.patterns()[1].pattern());

    assert!(filter.include(&artifact()));
    assert_eq!(filter.missed_patterns(), vec!["group:artifact:*".to_string()]);
    assert!(filter.describe().contains("'group:artifact:*'"));
}

#[test]
fn rejected_entities_keep_evaluation_order() {
    let filter = PatternFilter::includes(["nothing"], false).unwrap();
    let classified = Coordinate::new("g", "a", "jar", "1").with_classifier("sources");
    filter.include(&other());
    filter.include(&classified);
    assert_eq!(
        filter.rejected_entities(),
        vec!["otherGroup:otherArtifact:ejb:version".to_string(), "g:a:jar:sources:1".to_string()]
    );
}

#[test]
fn describe_lists_every_raw_pattern() {
    let raw = ["group:artifact:*", "!*:*:war", "g:a:jar:*:[1.0,2.0)", "::pom"];
    let filter = PatternFilter::includes(raw, false).unwrap();
    let text = filter.describe();
    assert!(text.starts_with("Includes filter:"));
    for pattern in raw {
        assert!(text.contains(pattern), "{pattern} missing from {text}");
    }
    assert_eq!(filter.to_string(), text);
}

#[test]
fn report_serializes_kind() {
    let filter = PatternFilter::excludes(["group"], false).unwrap();
    filter.include(&artifact());
    let report = filter.report();
    assert_eq!(report.kind, FilterKind::Excludes);
    assert_eq!(report.description, "artifact exclusion filter");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kind"], "excludes");
    assert_eq!(json["rejected_entities"][0], "group:artifact:jar:version");
}
