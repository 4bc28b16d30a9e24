use std::fs;

use navtoggle::{ConfigError, ToggleConfig};

#[test]
fn test_defaults() {
    let config = ToggleConfig::default();
    assert_eq!(config.trigger_selector, ".nav-toggle");
    assert_eq!(config.target_selector, ".nav-menu");
    assert_eq!(config.active_class, "active");
    assert_eq!(config.expanded_attribute, "aria-expanded");
}

#[test]
fn test_load_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r##"{
            "trigger_selector": "#menu-button",
            "target_selector": "#menu",
            "active_class": "open",
            "expanded_attribute": "data-open"
        }"##,
    )
    .unwrap();

    let config = ToggleConfig::load(&path).unwrap();
    assert_eq!(config.trigger_selector, "#menu-button");
    assert_eq!(config.target_selector, "#menu");
    assert_eq!(config.active_class, "open");
    assert_eq!(config.expanded_attribute, "data-open");
}

#[test]
fn test_partial_file_falls_back_per_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "active_class": "is-visible" }"#).unwrap();

    let config = ToggleConfig::load(&path).unwrap();
    assert_eq!(config.active_class, "is-visible");
    assert_eq!(config.trigger_selector, ".nav-toggle");
    assert_eq!(config.target_selector, ".nav-menu");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(ToggleConfig::load(&path), Err(ConfigError::Io(_))));
    assert_eq!(ToggleConfig::load_or_default(&path).unwrap(), ToggleConfig::default());
}

#[test]
fn test_parse_error_is_not_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = ToggleConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_serialize_round_trips_defaults() {
    let text = serde_json::to_string(&ToggleConfig::default()).unwrap();
    assert!(text.contains("\"aria-expanded\""));
}
