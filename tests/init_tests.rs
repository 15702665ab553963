use std::fs;

use serial_test::serial;
use tempfile::tempdir;

use telepulse_datasource::config::Config;
use telepulse_datasource::{init, DsError, Mode, StoreType};

#[test]
#[serial]
fn init_fails_when_logger_already_set() {
    // Pre-initialize logger
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cfg.toml");
    let mut cfg = Config::default();
    cfg.storage.store_type = StoreType::Memory;
    cfg.storage.base_path = "".into();
    fs::write(&config_path, toml::to_string(&cfg).unwrap()).unwrap();

    let result = init(Some(config_path.to_str().unwrap()));
    assert!(matches!(result, Err(DsError::InvalidInput(_))));
}

#[test]
#[serial]
fn init_still_returns_parse_errors_first() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "storage = 12").unwrap();

    let result = init(Some(config_path.to_str().unwrap()));
    assert!(matches!(
        result,
        Err(DsError::Config(telepulse_datasource::config::ConfigError::ParseError(_)))
    ));
}

#[tokio::test]
#[serial]
async fn loaded_config_drives_open() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cfg.toml");
    let mut cfg = Config::default();
    cfg.storage.store_type = StoreType::Memory;
    cfg.storage.base_path = "".into();
    cfg.datasource.default_mode = Mode::Simulated;
    fs::write(&config_path, toml::to_string(&cfg).unwrap()).unwrap();

    // Bypass init's logger step; just load and open.
    let loaded = Config::load(&config_path).unwrap();
    let controller = telepulse_datasource::open(&loaded).await.unwrap();
    assert_eq!(controller.mode(), Mode::Simulated);
}
