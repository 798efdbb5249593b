use navstack::config::{Config, ConfigError};
use navstack::nav::Destination;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.defaults.destination, Destination::RootView);
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.history.max_entries, 50);
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("navstack/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[defaults]
destination = "root"
tick_rate_ms = 100

[history]
max_entries = 5
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.defaults.destination, Destination::RootView);
    assert_eq!(config.defaults.tick_rate_ms, 100);
    assert_eq!(config.history.max_entries, 5);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("[history]\nmax_entries = 7\n");
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.history.max_entries, 7);
}

#[test]
fn test_unknown_destination_is_parse_error() {
    let (_dir, path) = write_config("[defaults]\ndestination = \"settings\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[defaults]\ntick_rate_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_history_fails_validation() {
    let mut config = Config::default();
    config.history.max_entries = 0;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("max_entries"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_unreadable_path_is_read_error() {
    // A directory exists but cannot be read as a file.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    match Config::load_from(temp_dir.path()) {
        Err(ConfigError::ReadError { .. }) => {}
        other => panic!("Expected ReadError, got {:?}", other),
    }
}
