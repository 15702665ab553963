// src/test_utils.rs

#![cfg(test)] // Ensure this module is only compiled for tests

use crate::config::Config;
use crate::{Mode, StoreType};

/// Provides a common test configuration: in-memory store, live default.
pub fn get_test_config() -> Config {
    let mut config = Config::default();
    config.storage.store_type = StoreType::Memory;
    config.storage.base_path = "".to_string();
    config.datasource.default_mode = Mode::Live;
    config
}
