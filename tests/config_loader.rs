mod common;

use common::temp_config;
use std::path::PathBuf;
use uptime_board::config::{Config, ConfigError};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:80");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(!config.behavior.refresh_after_mutation);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("uptime-board/config.toml"));
}

/// Test loading a full config file.
#[test]
fn test_load_full_config() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://monitor.example.com/uptime"
connect_timeout_seconds = 10

[ui]
tick_rate_ms = 100

[behavior]
refresh_after_mutation = true

[logging]
level = "debug"
file = "/tmp/uptime-board-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://monitor.example.com/uptime");
    assert_eq!(config.api.connect_timeout_seconds, 10);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(config.behavior.refresh_after_mutation);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/uptime-board-test.log"))
    );
}

/// Missing sections and keys fall back to defaults.
#[test]
fn test_partial_config_uses_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://10.0.0.5:8080"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui, Config::default().ui);
    assert_eq!(config.logging, Config::default().logging);
}

#[test]
fn test_empty_file_is_default_config() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let result = Config::load_from(&PathBuf::from("/nonexistent/uptime-board/config.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_non_http_url() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://example.com\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("ftp://example.com"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_values() {
    let mut config = Config::default();
    config.api.connect_timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "chatty".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("chatty")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
