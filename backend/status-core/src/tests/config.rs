use crate::config::{
    AppConfig, CONFIG_FILE_NAME, ENV_CATALOG_URL, ENV_CONFIG_DIR, ENV_HOST, ENV_LOG_LEVEL,
    ENV_PORT, default_config_dir,
};
use crate::error::config::ConfigError;

use std::path::PathBuf;

use log::LevelFilter;
use serial_test::serial;
use tempfile::TempDir;

const ALL_ENV: [&str; 5] = [ENV_HOST, ENV_PORT, ENV_CATALOG_URL, ENV_LOG_LEVEL, ENV_CONFIG_DIR];

fn clear_env() {
    for variable in ALL_ENV {
        // SAFETY: env-touching tests are #[serial]
        unsafe { std::env::remove_var(variable) };
    }
}

fn set_env(variable: &str, value: &str) {
    // SAFETY: env-touching tests are #[serial]
    unsafe { std::env::set_var(variable, value) };
}

fn write_config(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), contents).expect("write config");
}

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: First run has no file; the server must still start.
///
/// **BUG THIS CATCHES**: Would catch a missing file being treated as an error.
#[test]
fn given_no_config_file_when_loaded_then_defaults() {
    let dir = TempDir::new().expect("temp dir");

    let config = AppConfig::load(dir.path()).expect("defaults");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
    assert!(config.catalog.enabled);
}

/// **VALUE**: Verifies partial files fill the rest from defaults.
///
/// **WHY THIS MATTERS**: Operators usually set one or two keys.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]`.
#[test]
fn given_partial_config_file_when_loaded_then_merged_with_defaults() {
    let dir = TempDir::new().expect("temp dir");
    write_config(
        &dir,
        r#"
[server]
port = 8080

[catalog]
enabled = false
path = "/srv/catalog.toml"
"#,
    );

    let config = AppConfig::load(dir.path()).expect("config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert!(!config.catalog.enabled);
    assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/catalog.toml")));
}

/// **VALUE**: Verifies a corrupt file is an error, not silently defaulted.
///
/// **WHY THIS MATTERS**: Ignoring a typo would run the server with settings nobody chose.
///
/// **BUG THIS CATCHES**: Would catch parse errors being swallowed.
#[test]
fn given_corrupt_config_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    write_config(&dir, "[server\nport = ");

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies semantic validation of loaded values.
///
/// **WHY THIS MATTERS**: Port 0 and non-HTTP catalog URLs can only fail later and less
/// clearly.
///
/// **BUG THIS CATCHES**: Would catch `validate()` not being called from `load()`.
#[test]
fn given_invalid_values_when_loaded_then_validation_error() {
    for contents in [
        "[server]\nport = 0",
        "[server]\nhost = \"  \"",
        "[catalog]\nurl = \"ftp://example.com/catalog.toml\"",
        "[catalog]\nurl = \"http://\"",
        "[catalog]\nurl = \"https://bad host/catalog.toml\"",
        "[catalog]\nurl = \"http//example.com/catalog.toml\"",
        "[logging]\nlevel = \"loud\"",
    ] {
        let dir = TempDir::new().expect("temp dir");
        write_config(&dir, contents);

        let result = AppConfig::load(dir.path());

        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "{contents:?} should fail validation"
        );
    }
}

/// **VALUE**: Verifies log level parsing and its fallback.
///
/// **WHY THIS MATTERS**: Unset level picks by build profile in the binary.
///
/// **BUG THIS CATCHES**: Would catch case-sensitive level names.
#[test]
fn given_log_levels_when_read_then_level_filters() {
    let mut config = AppConfig::default();

    assert_eq!(config.log_level(LevelFilter::Warn).ok(), Some(LevelFilter::Warn));

    config.logging.level = Some("DEBUG".to_string());
    assert_eq!(config.log_level(LevelFilter::Warn).ok(), Some(LevelFilter::Debug));
}

/// **VALUE**: Verifies environment variables override the file.
///
/// **WHY THIS MATTERS**: Containers configure through the environment only.
///
/// **BUG THIS CATCHES**: Would catch overrides applied before the file is read.
#[test]
#[serial]
fn given_env_overrides_when_loaded_then_env_wins() {
    clear_env();
    let dir = TempDir::new().expect("temp dir");
    write_config(&dir, "[server]\nhost = \"0.0.0.0\"\nport = 8080");
    set_env(ENV_PORT, "9090");
    set_env(ENV_CATALOG_URL, "https://example.com/catalog.toml");
    set_env(ENV_LOG_LEVEL, "trace");

    let config = AppConfig::load_with_env(dir.path());
    clear_env();

    let config = config.expect("config");
    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert_eq!(
        config.catalog.url.as_deref(),
        Some("https://example.com/catalog.toml")
    );
    assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

/// **VALUE**: Verifies a non-numeric port variable is reported by name.
///
/// **WHY THIS MATTERS**: Operators need to know which variable is wrong.
///
/// **BUG THIS CATCHES**: Would catch a bad port being ignored.
#[test]
#[serial]
fn given_bad_port_env_when_loaded_then_environment_error() {
    clear_env();
    let dir = TempDir::new().expect("temp dir");
    set_env(ENV_PORT, "http");

    let result = AppConfig::load_with_env(dir.path());
    clear_env();

    match result {
        Err(ConfigError::EnvironmentError { variable, .. }) => assert_eq!(variable, ENV_PORT),
        other => panic!("expected environment error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the config directory can be redirected.
///
/// **WHY THIS MATTERS**: Tests and containers must not depend on the user's home.
///
/// **BUG THIS CATCHES**: Would catch the override variable being ignored.
#[test]
#[serial]
fn given_config_dir_env_when_resolved_then_env_path() {
    clear_env();
    set_env(ENV_CONFIG_DIR, "/tmp/status-meaning-test");

    let dir = default_config_dir();
    clear_env();

    assert_eq!(dir.ok(), Some(PathBuf::from("/tmp/status-meaning-test")));
}

/// **VALUE**: Verifies well-formed http and https catalog URLs pass validation.
///
/// **WHY THIS MATTERS**: URL checking parses the value, so valid URLs with ports,
/// paths and queries must still be accepted.
///
/// **BUG THIS CATCHES**: Would catch a scheme check that rejects `https` or a
/// parser rejecting ordinary catalog locations.
#[test]
fn given_http_and_https_catalog_urls_when_loaded_then_accepted() {
    for url in [
        "http://localhost:8080/catalog.toml",
        "https://example.com/status/catalog.toml?v=2",
    ] {
        let dir = TempDir::new().expect("temp dir");
        write_config(&dir, &format!("[catalog]\nurl = \"{url}\""));

        let config = AppConfig::load(dir.path()).expect("valid catalog url");

        assert_eq!(config.catalog.url.as_deref(), Some(url));
    }
}
