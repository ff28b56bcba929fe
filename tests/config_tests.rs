use std::io::Write;

use sql_style_checker::config::{Config, RulesConfig, split_list};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.rules.disabled.is_empty());
    assert!(config.rules.severity.is_empty());
    assert!(config.rules.excepted_names.is_empty());
}

#[test]
fn test_rules_config_excepted_names() {
    let config = RulesConfig {
        excepted_names: vec!["value".to_string(), " name ".to_string()],
        ..Default::default()
    };
    let names = config.excepted_names();

    assert_eq!(names.len(), 2);
    assert!(names.contains("VALUE"));
    assert!(names.contains("Name"));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[rules]\ndisabled = [\"Q449\", \"Q448\"]\n\n[rules.severity]\nQ441 = \"info\""
    )
    .unwrap();
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.rules.disabled, vec!["Q449", "Q448"]);
    assert_eq!(
        config.rules.severity.get("Q441").map(String::as_str),
        Some("info")
    );
}

#[test]
fn test_from_file_missing() {
    let result = Config::from_file(std::path::Path::new("/nonexistent/.sql-style.toml"));

    assert!(result.is_err());
}

#[test]
fn test_parse_empty() {
    let config = Config::parse("").unwrap();

    assert!(config.rules.disabled.is_empty());
}

#[test]
fn test_parse_wrong_type() {
    assert!(Config::parse("[rules]\ndisabled = \"Q449\"").is_err());
}

#[test]
fn test_split_list() {
    assert_eq!(split_list("Q440,Q441"), vec!["Q440", "Q441"]);
    assert!(split_list("").is_empty());
}
