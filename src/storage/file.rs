// src/storage/file.rs

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::DsError;
use crate::storage::PreferenceStore;
use crate::types::Mode;

const MARKER_FILE_NAME: &str = ".telepulse-datasource";

/// A preference store that persists the mode to the file system.
///
/// The mode lives in a single file under the base path, named by the
/// configured storage key, containing exactly the literal string `live` or
/// `simulated`:
/// `base_path/<storage_key>`
#[derive(Debug)]
pub struct FileStore {
    base_path: PathBuf,
    storage_key: String,
}

impl FileStore {
    /// Creates a new `FileStore` instance.
    ///
    /// This will create the base directory and a marker file
    /// (`.telepulse-datasource`) if they don't already exist.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The directory where the preference is stored.
    /// * `storage_key` - File name for the mode preference.
    pub async fn new<P: AsRef<Path>>(base_path: P, storage_key: &str) -> Result<Self, DsError> {
        let path = base_path.as_ref().to_path_buf();

        fs::create_dir_all(&path).await.map_err(|e| {
            DsError::storage(format!(
                "Failed to create base path '{}': {}",
                path.display(),
                e
            ))
        })?;

        let marker_path = path.join(MARKER_FILE_NAME);
        if !fs::try_exists(&marker_path).await.map_err(|e| {
            DsError::storage(format!(
                "Failed to check marker file existence '{}': {}",
                marker_path.display(),
                e
            ))
        })? {
            fs::File::create(&marker_path).await.map_err(|e| {
                DsError::storage(format!(
                    "Failed to create marker file '{}': {}",
                    marker_path.display(),
                    e
                ))
            })?;
        }

        Ok(Self {
            base_path: path,
            storage_key: storage_key.to_string(),
        })
    }

    /// Path of the file holding the mode literal.
    fn mode_path(&self) -> PathBuf {
        self.base_path.join(&self.storage_key)
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    async fn load_mode(&self) -> Result<Option<Mode>, DsError> {
        let path = self.mode_path();
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Mode::from_stored(&contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DsError::storage(format!(
                "Failed to read mode file '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    async fn store_mode(&self, mode: Mode) -> Result<(), DsError> {
        let path = self.mode_path();
        fs::write(&path, mode.as_str()).await.map_err(|e| {
            DsError::storage(format!(
                "Failed to write mode file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_marker_file() {
        let dir = tempdir().unwrap();
        let _store = FileStore::new(dir.path(), "data_source_mode").await.unwrap();
        assert!(dir.path().join(MARKER_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn missing_file_reads_as_absent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path(), "data_source_mode").await.unwrap();
        assert_eq!(store.load_mode().await.unwrap(), None);
    }

    #[tokio::test]
    async fn stores_bare_literal() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path(), "data_source_mode").await.unwrap();
        store.store_mode(Mode::Simulated).await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("data_source_mode")).unwrap();
        assert_eq!(contents, "simulated");
        assert_eq!(store.load_mode().await.unwrap(), Some(Mode::Simulated));
    }

    #[tokio::test]
    async fn garbage_contents_read_as_absent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path(), "data_source_mode").await.unwrap();
        std::fs::write(dir.path().join("data_source_mode"), "definitely-not-a-mode").unwrap();
        assert_eq!(store.load_mode().await.unwrap(), None);
    }
}
