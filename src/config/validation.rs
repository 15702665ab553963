//! Configuration validation for the Telepulse data-source layer
//!
//! This module contains functions for validating the crate configuration to
//! ensure all values are acceptable and consistent with each other.

use super::error::ConfigError;
use super::{Config, DataSourceConfig, StorageConfig};
use crate::StoreType;

/// Validates the crate configuration.
///
/// # Errors
///
/// Returns a `ConfigError` if any validation check fails.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_datasource_config(&config.datasource)?;
    validate_storage_config(&config.storage)?;
    Ok(())
}

/// Validates the data-source section.
fn validate_datasource_config(config: &DataSourceConfig) -> Result<(), ConfigError> {
    if config.storage_key.trim().is_empty() {
        return Err(ConfigError::missing_value("datasource.storage_key"));
    }

    // The key names a single flat entry in the store; path separators would
    // let it escape the storage directory.
    if config.storage_key.contains('/') || config.storage_key.contains('\\') {
        return Err(ConfigError::invalid_value(
            "datasource.storage_key",
            &config.storage_key,
            "Storage key must not contain path separators",
        ));
    }

    Ok(())
}

/// Validates the storage section.
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.store_type == StoreType::File && config.base_path.trim().is_empty() {
        return Err(ConfigError::invalid_value(
            "storage.base_path",
            &config.base_path,
            "File storage requires a non-empty base path",
        ));
    }

    Ok(())
}
