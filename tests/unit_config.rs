// tests/unit_config.rs
use indu_core::config::{Config, LayerRule, CONFIG_FILE};
use indu_core::error::IndError;
use std::fs;

#[test]
fn test_defaults() {
    let c = Config::new();
    assert!(c.scan.is_ignored_dir(".git"));
    assert!(c.scan.is_ignored_dir("__pycache__"));
    assert!(c.scan.is_ignored_dir("node_modules"));
    assert!(c.scan.is_ignored_dir(".web"));
    assert!(c.scan.is_ignored_dir("assets"));
    assert!(!c.scan.is_ignored_dir("src"));
    assert!(c.scan.is_ignored_file(".DS_Store"));
    assert!(c.scan.parallel);
    assert_eq!(c.architecture.rules, vec![LayerRule::component_state()]);
}

#[test]
fn test_missing_file_is_default() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load_from(d.path()).unwrap();
    assert_eq!(c.scan.ignore_files, vec![".DS_Store"]);
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[scan]\nignore_dirs = [\"build\"]\nparallel = false\n",
    )
    .unwrap();
    let c = Config::load_from(d.path()).unwrap();
    assert_eq!(c.scan.ignore_dirs, vec!["build"]);
    assert!(!c.scan.parallel);
    // Untouched sections keep their defaults.
    assert_eq!(c.scan.ignore_files, vec![".DS_Store"]);
    assert_eq!(c.architecture.rules.len(), 1);
}

#[test]
fn test_rules_replace_defaults() {
    let c = Config::parse_toml(
        "[[architecture.rules]]\nsource_tokens = [\"api\"]\nforbidden_tokens = [\"cli\"]\n",
    )
    .unwrap();
    assert_eq!(c.architecture.rules.len(), 1);
    let rule = &c.architecture.rules[0];
    assert_eq!(rule.source_tokens, vec!["api"]);
    assert!(rule.message.contains("{file}"));
}

#[test]
fn test_empty_rules_disable_validation() {
    let c = Config::parse_toml("[architecture]\nrules = []\n").unwrap();
    assert!(c.architecture.rules.is_empty());
}

#[test]
fn test_bad_types_are_config_errors() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[scan]\nparallel = \"yes\"\n").unwrap();
    let err = Config::load_from(d.path()).unwrap_err();
    assert!(matches!(err, IndError::Config { .. }));
    assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
fn test_toml_round_trip_keeps_rules() {
    let c = Config::new();
    let text = c.to_toml().unwrap();
    assert!(text.contains("component-state"));
    let back = Config::parse_toml(&text).unwrap();
    assert_eq!(back.architecture.rules, c.architecture.rules);
}
