//! Configuration tests
//!
//! Round-trips through `to_toml`, precedence between env, file and
//! defaults, and error handling for broken files.

use super::*;
use std::collections::HashMap;
use std::path::PathBuf;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("test TOML should parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back into the same values.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

/// Strings with quotes and backslashes must survive serialization.
#[test]
fn test_config_roundtrip_escaping() {
    let mut config = Config::default();
    config.selector.options = vec!["say \"hi\"".to_string(), r"C:\dir".to_string()];
    config.selector.selected = 1;
    config.text_field.placeholder = "a \"quoted\" hint".to_string();
    config.logging.file_rotation = LogRotation::Never;

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(resolved, config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let resolved = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(resolved, Config::default());
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
[selector]
options = ["One", "Two"]
selected = 1

[logging]
level = "debug"
file_rotation = "hourly"
"#,
    );

    let config = Config::resolve(file, no_env);

    assert_eq!(config.selector.options, vec!["One", "Two"]);
    assert_eq!(config.selector.selected, 1);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(config.text_field, TextFieldConfig::default());
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
[selector]
options = ["One", "Two"]

[text_field]
placeholder = "from file"

[logging]
file_dir = "/tmp/file-logs"
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([
        ("KNOBS_OPTIONS", "red, green,, blue"),
        ("KNOBS_PLACEHOLDER", "from env"),
        ("KNOBS_LOG_DIR", "/tmp/env-logs"),
    ]);

    let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.selector.options, vec!["red", "green", "blue"]);
    assert_eq!(config.text_field.placeholder, "from env");
    assert_eq!(config.logging.file_dir, PathBuf::from("/tmp/env-logs"));
}

#[test]
fn test_blank_option_lists_are_ignored() {
    let file = parse(
        r#"
[selector]
options = ["One", "Two"]
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([("KNOBS_OPTIONS", " , ")]);

    let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.selector.options, vec!["One", "Two"]);

    let config = Config::resolve(parse("[selector]\noptions = []\n"), no_env);
    assert_eq!(config.selector.options, SelectorConfig::default().options);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("knobs-config-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_missing_file_is_defaults() {
    let dir = scratch_dir("missing");
    let file = Config::load_file_config(&dir.join("config.toml")).unwrap();
    assert!(file.selector.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = scratch_dir("invalid");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[selector\noptions = 3").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_write_default_then_load() {
    let dir = scratch_dir("write");
    let path = dir.join("nested").join("config.toml");

    Config::write_default(&path).unwrap();
    let file = Config::load_file_config(&path).unwrap();

    assert_eq!(Config::resolve(file, no_env), Config::default());
    let _ = std::fs::remove_dir_all(&dir);
}
