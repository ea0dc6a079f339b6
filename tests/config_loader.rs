use moviedeck::config::{Config, ConfigError};
use moviedeck::movies::SourceStyle;
use std::time::Duration;
use tempfile::TempDir;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.source.endpoint, "https://swapi.dev/api/films/");
    assert_eq!(config.source.style, SourceStyle::Films);
    assert_eq!(config.client.timeout(), Duration::from_secs(30));
    assert_eq!(config.client.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.retry.interval(), Duration::from_millis(5000));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviedeck/config.toml"));
}

#[test]
fn test_full_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[source]
endpoint = "http://localhost:9000/movies.json"
style = "document_store"

[client]
timeout_seconds = 10
connect_timeout_seconds = 2

[retry]
interval_ms = 250
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.endpoint, "http://localhost:9000/movies.json");
    assert!(config.source.style.supports_writes());
    assert_eq!(config.client.timeout_seconds, 10);
    assert_eq!(config.retry.interval(), Duration::from_millis(250));
}

/// An unknown style name is a parse error, not a silent fallback.
#[test]
fn test_unknown_style_fails_to_parse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[source]\nstyle = \"graphql\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[client]\ntimeout_seconds = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("client timeouts must be greater than zero"));
}
