use crate::error::config::ConfigError;

use models::ErrorLocation;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILE_NAME: &str = "status-meaning.toml";
const CONFIG_DIR_NAME: &str = "status-meaning";

pub const ENV_CONFIG_DIR: &str = "STATUS_MEANING_CONFIG_DIR";
pub const ENV_HOST: &str = "STATUS_MEANING_HOST";
pub const ENV_PORT: &str = "STATUS_MEANING_PORT";
pub const ENV_CATALOG_PATH: &str = "STATUS_MEANING_CATALOG";
pub const ENV_CATALOG_URL: &str = "STATUS_MEANING_CATALOG_URL";
pub const ENV_LOG_LEVEL: &str = "STATUS_MEANING_LOG_LEVEL";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the status provider's data comes from.
///
/// With neither `url` nor `path` set, the bundled catalog is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_enabled")]
    pub enabled: bool,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            enabled: default_catalog_enabled(),
            path: None,
            url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`; unset picks by build profile.
    pub level: Option<String>,
    /// Also write a plain-text log file here.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_catalog_enabled() -> bool {
    true
}

// ============================================
// IMPLEMENTATION
// ============================================

/// `$STATUS_MEANING_CONFIG_DIR`, else `{platform config dir}/status-meaning`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::caller(),
            reason: "No platform config directory available".to_string(),
        })
}

impl AppConfig {
    /// Load config from {config_dir}/status-meaning.toml.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// File config with environment overrides applied, validated.
    pub fn load_with_env(config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(config_dir)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `STATUS_MEANING_*` variables onto this config.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(host) = env_value(ENV_HOST) {
            self.server.host = host;
        }

        if let Some(port) = env_value(ENV_PORT) {
            self.server.port = port.parse().map_err(|e| ConfigError::EnvironmentError {
                location: ErrorLocation::caller(),
                variable: ENV_PORT.to_string(),
                reason: format!("{port:?} is not a port number: {e}"),
            })?;
        }

        if let Some(path) = env_value(ENV_CATALOG_PATH) {
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(url) = env_value(ENV_CATALOG_URL) {
            self.catalog.url = Some(url);
        }

        if let Some(level) = env_value(ENV_LOG_LEVEL) {
            self.logging.level = Some(level);
        }

        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: "server.host cannot be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: "server.port must be between 1 and 65535".to_string(),
            });
        }

        if let Some(ref url) = self.catalog.url {
            let parsed = Url::parse(url).map_err(|e| ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!("Invalid catalog URL {url}: {e}"),
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::caller(),
                    reason: format!("Catalog URL must use http or https: {url}"),
                });
            }
        }

        self.log_level(LevelFilter::Info)?;

        Ok(())
    }

    /// Configured log level, or `fallback` when none is set.
    pub fn log_level(&self, fallback: LevelFilter) -> Result<LevelFilter, ConfigError> {
        match self.logging.level.as_deref() {
            None => Ok(fallback),
            Some(level) => LevelFilter::from_str(level.trim()).map_err(|_| {
                ConfigError::ValidationError {
                    location: ErrorLocation::caller(),
                    reason: format!("Invalid log level: {level}"),
                }
            }),
        }
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_value(variable: &str) -> Option<String> {
    std::env::var(variable)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
