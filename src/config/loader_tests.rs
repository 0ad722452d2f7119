//! Unit tests for configuration loading.

use super::*;
use serial_test::serial;
use std::fs;
use std::path::Path;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("testdeck_config_tests");
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test config");
    path
}

fn cleanup(path: &Path) {
    let _ = fs::remove_file(path);
}

// ===== load_config_file =====

#[test]
fn missing_file_is_not_an_error() {
    let result = load_config_file("/definitely/not/a/real/config.toml");
    assert!(matches!(result, Ok(None)), "Missing file should yield Ok(None)");
}

#[test]
fn well_formed_file_loads_all_fields() {
    let path = temp_config(
        "full.toml",
        r#"
data_file = "/srv/testdeck/project.json"
log_file_path = "/var/log/testdeck.log"
"#,
    );

    let config = load_config_file(&path)
        .expect("load succeeds")
        .expect("file exists");
    assert_eq!(config.data_file, Some(PathBuf::from("/srv/testdeck/project.json")));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/var/log/testdeck.log")));

    cleanup(&path);
}

#[test]
fn empty_file_loads_with_all_fields_unset() {
    let path = temp_config("empty.toml", "");
    let config = load_config_file(&path)
        .expect("load succeeds")
        .expect("file exists");
    assert_eq!(config.data_file, None);
    assert_eq!(config.log_file_path, None);
    cleanup(&path);
}

#[test]
fn invalid_toml_reports_parse_error() {
    let path = temp_config("broken.toml", "data_file = [not toml");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    cleanup(&path);
}

#[test]
fn unknown_keys_are_rejected() {
    let path = temp_config("unknown.toml", "no_such_setting = true");
    let result = load_config_file(&path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should fail loudly instead of being silently ignored"
    );
    cleanup(&path);
}

// ===== merge_config =====

#[test]
fn merge_with_no_file_yields_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.data_file, None);
}

#[test]
fn merge_prefers_file_values_over_defaults() {
    let file = ConfigFile {
        data_file: Some(PathBuf::from("/srv/project.json")),
        log_file_path: None,
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.data_file, Some(PathBuf::from("/srv/project.json")));
    assert_eq!(
        resolved.log_file_path,
        default_log_path(),
        "Unset fields keep their defaults"
    );
}

// ===== Environment handling =====

#[test]
#[serial(testdeck_env)]
fn env_var_overrides_data_file() {
    std::env::set_var("TESTDECK_DATA", "/from/env/project.json");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.data_file, Some(PathBuf::from("/from/env/project.json")));
    std::env::remove_var("TESTDECK_DATA");
}

#[test]
#[serial(testdeck_env)]
fn no_env_var_leaves_config_untouched() {
    std::env::remove_var("TESTDECK_DATA");
    let base = ResolvedConfig {
        data_file: Some(PathBuf::from("/from/file.json")),
        ..ResolvedConfig::default()
    };
    let resolved = apply_env_overrides(base.clone());
    assert_eq!(resolved, base);
}

#[test]
#[serial(testdeck_env)]
fn config_env_var_points_at_alternate_file() {
    let path = temp_config("from-env.toml", r#"data_file = "/env/selected.json""#);
    std::env::set_var("TESTDECK_CONFIG", &path);

    let config = load_config_with_precedence(None)
        .expect("load succeeds")
        .expect("env-selected file exists");
    assert_eq!(config.data_file, Some(PathBuf::from("/env/selected.json")));

    std::env::remove_var("TESTDECK_CONFIG");
    cleanup(&path);
}

#[test]
#[serial(testdeck_env)]
fn explicit_path_beats_config_env_var() {
    let env_path = temp_config("env.toml", r#"data_file = "/env.json""#);
    let explicit_path = temp_config("explicit.toml", r#"data_file = "/explicit.json""#);
    std::env::set_var("TESTDECK_CONFIG", &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("load succeeds")
        .expect("explicit file exists");
    assert_eq!(config.data_file, Some(PathBuf::from("/explicit.json")));

    std::env::remove_var("TESTDECK_CONFIG");
    cleanup(&env_path);
    cleanup(&explicit_path);
}

// ===== Paths =====

#[test]
fn default_log_path_ends_with_testdeck_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("testdeck.log"),
        "Default log path should end with 'testdeck.log', got: {:?}",
        path
    );
}

#[test]
fn default_config_path_contains_testdeck_directory() {
    if let Some(path) = default_config_path() {
        assert!(path.to_string_lossy().contains("testdeck"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
