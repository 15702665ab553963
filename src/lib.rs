// src/lib.rs

//! Data-source mode controller for the Telepulse Telegram channel
//! analytics client.
//!
//! The UI layer renders dashboards over a REST backend; demo and trial
//! accounts see deterministic simulated data instead. This crate is the
//! single authority for which of the two paths is active: it owns the
//! persisted live/simulated flag, notifies subscribers when it flips, and
//! routes dual-path operations so simulated data can never silently stand
//! in for a live request.

pub mod config;
pub mod core;
pub mod error;
pub mod simulated;
pub mod storage;
pub mod types;

#[cfg(feature = "demo")]
pub mod demo_cli;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use crate::core::{ChannelId, ChannelOverrides, GuardedOutcome, ModeController, Subscription};
pub use error::{DsError, Result as DsResult};
pub use types::{LogLevel, Mode, StoreType};

use std::sync::Arc;

use storage::PreferenceStore;

/// Default configuration file looked up when [`init`] is given no path.
pub const DEFAULT_CONFIG_PATH: &str = "./telepulse.toml";

/// Loads configuration and installs the global logger.
///
/// Call once at process start. Fails with [`DsError::InvalidInput`] if a
/// logger has already been installed, and with a configuration error if an
/// existing config file cannot be parsed; a missing file falls back to
/// defaults plus environment overrides.
#[cfg(feature = "logging")]
pub fn init(config_path: Option<&str>) -> DsResult<Config> {
    let config = Config::load(config_path.unwrap_or(DEFAULT_CONFIG_PATH))?;

    let level = if config.logging.console {
        config.logging.level.to_filter()
    } else {
        log::LevelFilter::Off
    };
    env_logger::Builder::new()
        .filter_level(level)
        .try_init()
        .map_err(|e| DsError::invalid_input(format!("logger already initialized: {}", e)))?;

    Ok(config)
}

/// Builds the configured preference store and seeds a [`ModeController`]
/// from it.
///
/// The store is read exactly once; an absent or unrecognized persisted
/// value yields `config.datasource.default_mode`.
pub async fn open(config: &Config) -> DsResult<ModeController> {
    let store: Arc<dyn PreferenceStore> = match config.storage.store_type {
        #[cfg(feature = "memory-store")]
        StoreType::Memory => Arc::new(storage::memory::MemoryStore::new()),
        #[cfg(feature = "file-store")]
        StoreType::File => Arc::new(
            storage::file::FileStore::new(&config.storage.base_path, &config.datasource.storage_key)
                .await?,
        ),
        #[allow(unreachable_patterns)]
        other => {
            return Err(DsError::invalid_input(format!(
                "store type '{}' is not compiled into this build",
                other
            )))
        }
    };

    Ok(ModeController::load_with_default(store, config.datasource.default_mode).await)
}
