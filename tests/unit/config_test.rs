//! Tests for filter configuration loading

use artifact_filter::config::{CONFIG_FILE, FilterConfig};
use artifact_filter::core::models::Coordinate;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"
[filter]
transitive = true
includes = ["!org.example:internal", "org.example:*"]
excludes = ["*:*:*:tests:*"]
"#;

#[test]
fn parses_all_keys() {
    let config = FilterConfig::from_toml(SAMPLE).unwrap();
    assert!(config.filter.transitive);
    assert_eq!(config.filter.includes.len(), 2);
    assert_eq!(config.filter.excludes, vec!["*:*:*:tests:*"]);
}

#[test]
fn missing_table_is_empty() {
    let config = FilterConfig::from_toml("# nothing here\n").unwrap();
    assert!(!config.filter.transitive);
    assert!(config.filter.includes.is_empty());
    assert!(config.excludes_filter().unwrap().is_none());
}

#[test]
fn rejects_wrong_types() {
    assert!(FilterConfig::from_toml("[filter]\nincludes = \"not-a-list\"\n").is_err());
}

#[test]
fn builds_filters() {
    let config = FilterConfig::from_toml(SAMPLE).unwrap();
    let includes = config.includes_filter().unwrap().unwrap();
    let excludes = config.excludes_filter().unwrap().unwrap();
    assert!(includes.is_transitive());

    let core = Coordinate::new("org.example", "core", "jar", "1.0");
    let internal = Coordinate::new("org.example", "internal", "jar", "1.0");
    let tests = core.clone().with_classifier("tests");

    assert!(includes.include(&core));
    assert!(!includes.include(&internal));
    assert!(excludes.include(&core));
    assert!(!excludes.include(&tests));
}

#[test]
fn invalid_pattern_in_config() {
    let config = FilterConfig::from_toml("[filter]\nincludes = [\"a:b:c:d:e:f\"]\n").unwrap();
    assert!(config.includes_filter().is_err());
}

#[test]
fn discover_default_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE), SAMPLE).unwrap();

    let config = FilterConfig::discover(None, temp.path()).unwrap();
    assert!(config.filter.transitive);
}

#[test]
fn discover_without_file_is_default() {
    let temp = TempDir::new().unwrap();
    let config = FilterConfig::discover(None, temp.path()).unwrap();
    assert_eq!(config, FilterConfig::default());
}

#[test]
fn explicit_path_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");
    assert!(FilterConfig::discover(Some(&missing), temp.path()).is_err());
}

#[test]
fn toml_round_trip() {
    let config = FilterConfig::from_toml(SAMPLE).unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(FilterConfig::from_toml(&text).unwrap(), config);
}
