//! Configuration management for the Telepulse data-source layer
//!
//! This module handles loading, validating, and providing access to the
//! crate configuration. It supports loading configuration from files,
//! environment variables, and programmatic overrides.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod validation;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/config_mod_tests.rs"]
mod config_mod_tests;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{LogLevel, Mode, StoreType};

/// Re-export the error type
pub use error::ConfigError;

/// The environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "TP_";

/// The application name used for finding config directories
const APP_NAME: &str = "telepulse-datasource";

/// Main configuration structure for the Telepulse data-source layer.
///
/// This struct holds all configuration options for the crate. It can be
/// loaded from a TOML file, environment variables, or created
/// programmatically.
///
/// # Example
///
/// ```no_run
/// use telepulse_datasource::config::Config;
///
/// // If the provided path is not found, load falls back to defaults.
/// let config = Config::load("path/to/telepulse.toml").unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Data-source mode configuration
    pub datasource: DataSourceConfig,

    /// Preference-store configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Data-source mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Mode used when the preference store holds no recognizable value
    pub default_mode: Mode,
    /// Key under which the mode preference is persisted
    pub storage_key: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Live,
            storage_key: "data_source_mode".to_string(),
        }
    }
}

/// Preference-store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store type
    #[serde(rename = "type")]
    pub store_type: StoreType,
    /// Base path for file storage (ignored for memory storage)
    pub base_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_type: StoreType::File,
            base_path: "./data".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Whether to log to console
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
        }
    }
}

impl Default for Config {
    /// Creates a default configuration with sensible defaults.
    ///
    /// This is used when no configuration file is found or when the
    /// configuration file cannot be parsed.
    fn default() -> Self {
        Config {
            datasource: DataSourceConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from the specified path.
    ///
    /// The configuration is loaded in the following order:
    /// 1. From the specified file path
    /// 2. From environment variables with the `TP_` prefix
    /// 3. From built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed, or if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(config_str) => {
                let mut config: Config = toml::from_str(&config_str)?;

                config.apply_env_vars()?;
                config.validate()?;

                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Config file not found at {}, using defaults", path.display());
                let mut config = Self::default();
                config.apply_env_vars()?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::file_not_found(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Environment variables should be prefixed with `TP_` and use `_` as a
    /// separator. For example, to set the log level, use
    /// `TP_LOGGING_LEVEL=debug`; to set the default data-source mode, use
    /// `TP_DATASOURCE_DEFAULT_MODE=simulated`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable cannot be parsed.
    pub fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in env::vars() {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                // Skip empty values
                if value.trim().is_empty() {
                    continue;
                }

                match stripped.to_lowercase().as_str() {
                    "logging_level" => {
                        self.logging.level = value.parse().map_err(|_| {
                            ConfigError::invalid_value("logging.level", &value, "Invalid log level")
                        })?;
                    }
                    "datasource_default_mode" => {
                        self.datasource.default_mode = value.parse().map_err(|_| {
                            ConfigError::invalid_value(
                                "datasource.default_mode",
                                &value,
                                "Invalid data-source mode",
                            )
                        })?;
                    }
                    "storage_type" => {
                        self.storage.store_type = value.parse().map_err(|_| {
                            ConfigError::invalid_value("storage.type", &value, "Invalid store type")
                        })?;
                    }
                    "storage_base_path" => {
                        self.storage.base_path = value;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Returns the path to the directory where configuration files should
    /// be stored.
    ///
    /// This is OS-specific:
    /// - Linux: `$HOME/.config/telepulse-datasource`
    /// - macOS: `$HOME/Library/Application Support/com.telepulse.datasource`
    /// - Windows: `%APPDATA%\\Telepulse\\telepulse-datasource`
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "telepulse", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }
}
