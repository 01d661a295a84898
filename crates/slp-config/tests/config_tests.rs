//! Configuration loading and precedence tests

use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use slp_config::{ConfigError, ConfigLoader, GlobalConfig, ProjectConfig, RunConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("slp.toml");
    fs::write(&config_path, content).unwrap();
    config_path
}

fn create_global_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("global.toml");
    fs::write(&path, content).unwrap();
    path
}

fn clear_env() {
    for var in ["SLP_REPORT_MAXARGS", "SLP_LOG_LEVEL", "SLP_DEFAULT_PROGRAM"] {
        env::remove_var(var);
    }
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
#[serial]
fn test_load_when_no_config_exists() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();

    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let config = loader.load_from_directory(temp_dir.path()).unwrap();

    assert!(!config.is_project());
    assert!(config.report_maxargs());
    assert_eq!(config.default_program(), "prog");
    assert_eq!(config.log_level(), "warn");
}

#[test]
#[serial]
fn test_load_from_nested_subdirectory_finds_parent() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[run]
default_program = "operand-order"
"#,
    );

    let sub2 = temp_dir.path().join("sub1").join("sub2");
    fs::create_dir_all(&sub2).unwrap();

    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let config = loader.load_from_directory(&sub2).unwrap();

    assert_eq!(config.default_program(), "operand-order");
    assert_eq!(config.project_root(), Some(temp_dir.path()));
}

#[test]
#[serial]
fn test_load_from_explicit_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(
        temp_dir.path(),
        r#"
[logging]
level = "trace"
"#,
    );

    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let config = loader.load_from_file(&path).unwrap();

    assert_eq!(config.log_level(), "trace");
    assert!(config.is_project());
}

#[test]
fn test_load_missing_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));

    let result = loader.load_from_file(&temp_dir.path().join("slp.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
#[serial]
fn test_malformed_toml_reports_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(temp_dir.path(), "[run\nreport_maxargs = true\n");

    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let err = loader.load_from_directory(temp_dir.path()).unwrap_err();

    match err {
        ConfigError::TomlParseError { file, .. } => assert_eq!(file, path),
        other => panic!("expected TomlParseError, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_unknown_key_is_rejected() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[run]
report_maxarg = true
"#,
    );

    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    assert!(loader.load_from_directory(temp_dir.path()).is_err());
}

#[test]
#[serial]
fn test_invalid_level_in_project_file() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    create_config_file(
        temp_dir.path(),
        r#"
[logging]
level = "chatty"
"#,
    );

    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let err = loader.load_from_directory(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "logging.level"));
}

// ============================================================================
// Precedence Tests
// ============================================================================

#[test]
#[serial]
fn test_project_overrides_global() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let global = create_global_file(
        temp_dir.path(),
        r#"
[run]
report_maxargs = false
default_program = "shadowing"

[logging]
level = "info"
"#,
    );
    create_config_file(
        temp_dir.path(),
        r#"
[run]
default_program = "nested-print"
"#,
    );

    let mut loader = ConfigLoader::with_global_config_path(global);
    let config = loader.load_from_directory(temp_dir.path()).unwrap();

    // project wins where set, global fills the rest
    assert_eq!(config.default_program(), "nested-print");
    assert!(!config.report_maxargs());
    assert_eq!(config.log_level(), "info");
}

#[test]
#[serial]
fn test_env_overrides_project_and_global() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let global = create_global_file(
        temp_dir.path(),
        r#"
[run]
default_program = "shadowing"
"#,
    );
    create_config_file(
        temp_dir.path(),
        r#"
[run]
default_program = "nested-print"
report_maxargs = true
"#,
    );

    env::set_var("SLP_DEFAULT_PROGRAM", "div-by-zero");
    env::set_var("SLP_REPORT_MAXARGS", "no");

    let mut loader = ConfigLoader::with_global_config_path(global);
    let config = loader.load_from_directory(temp_dir.path());
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.default_program(), "div-by-zero");
    assert!(!config.report_maxargs());
}

#[rstest]
#[case("true", true)]
#[case("1", true)]
#[case("Yes", true)]
#[case("false", false)]
#[case("0", false)]
#[case("NO", false)]
#[serial]
fn test_env_bool_spellings(#[case] value: &str, #[case] expected: bool) {
    clear_env();
    let temp_dir = TempDir::new().unwrap();

    env::set_var("SLP_REPORT_MAXARGS", value);
    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let config = loader.load_from_directory(temp_dir.path());
    clear_env();

    assert_eq!(config.unwrap().report_maxargs(), expected);
}

#[test]
#[serial]
fn test_empty_env_program_rejected() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();

    env::set_var("SLP_DEFAULT_PROGRAM", "");
    let mut loader = ConfigLoader::with_global_config_path(temp_dir.path().join("missing.toml"));
    let result = loader.load_from_directory(temp_dir.path());
    clear_env();

    assert!(result.is_err());
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_project_config_serializes_only_set_fields() {
    let config = ProjectConfig {
        run: Some(RunConfig {
            report_maxargs: Some(false),
            default_program: None,
        }),
        logging: None,
    };

    insta::assert_snapshot!(toml::to_string(&config).unwrap(), @r"
    [run]
    report_maxargs = false
    ");
}

#[test]
fn test_global_config_round_trips() {
    let text = r#"
[run]
default_program = "sequencing"

[logging]
level = "error"
"#;
    let config: GlobalConfig = toml::from_str(text).unwrap();
    let back: GlobalConfig = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
    assert_eq!(config, back);
}
