mod common;

use std::path::Path;
use std::time::Duration;

use tally::config::{Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.ui.show_turn_log);
    assert_eq!(config.ui.turn_log_capacity, 8);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("tally/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/tally/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = common::temp_config(
        r#"
[ui]
show_turn_log = false

[logging]
level = "debug"
file = "/tmp/tally-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert!(!config.ui.show_turn_log);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.resolved_file(),
        Path::new("/tmp/tally-test.log")
    );
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = common::temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_config("[ui\ntick_rate_ms = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = common::temp_config("[ui]\ntick_rate_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_log_capacity_fails_validation() {
    let mut config = Config::default();
    config.ui.turn_log_capacity = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_blank_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory exists but cannot be read as a file.
    match Config::load_from(dir.path()) {
        Err(ConfigError::ReadError { .. }) => {}
        other => panic!("Expected ReadError, got {:?}", other),
    }
}
