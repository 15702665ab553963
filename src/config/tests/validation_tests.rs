use super::*;

#[test]
fn test_default_config_is_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_empty_storage_key_rejected() {
    let mut cfg = Config::default();
    cfg.datasource.storage_key = "  ".to_string();
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::MissingValue(_))
    ));
}

#[test]
fn test_storage_key_with_path_separator_rejected() {
    let mut cfg = Config::default();
    cfg.datasource.storage_key = "../escape".to_string();
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "datasource.storage_key"
    ));
}

#[test]
fn test_file_store_requires_base_path() {
    let mut cfg = Config::default();
    cfg.storage.store_type = StoreType::File;
    cfg.storage.base_path = "".to_string();
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidValue { ref field, .. }) if field == "storage.base_path"
    ));
}

#[test]
fn test_memory_store_allows_empty_base_path() {
    let mut cfg = Config::default();
    cfg.storage.store_type = StoreType::Memory;
    cfg.storage.base_path = "".to_string();
    assert!(cfg.validate().is_ok());
}
