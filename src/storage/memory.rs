// src/storage/memory.rs

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::DsError;
use crate::storage::PreferenceStore;
use crate::types::Mode;

/// An in-memory preference store, primarily for testing or ephemeral use.
///
/// Holds the persisted literal in a `Mutex<Option<String>>` so tests can
/// also seed unrecognized values and exercise the default-safe fallback.
///
/// It also includes a mechanism to simulate storage failures for testing
/// error handling paths, configurable via `set_fail_on_store`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
    fail_on_store: Mutex<bool>,
}

impl MemoryStore {
    /// Creates a new, empty `MemoryStore` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `MemoryStore` already holding the given raw literal.
    ///
    /// The literal is stored verbatim, so tests can inject garbage and
    /// verify that `load_mode` treats it as absent.
    pub fn with_raw_value<S: Into<String>>(value: S) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
            fail_on_store: Mutex::new(false),
        }
    }

    /// Configures this `MemoryStore` instance to simulate a failure when
    /// `store_mode` is called.
    pub fn set_fail_on_store(&self, fail: bool) {
        *self.fail_on_store.lock().unwrap() = fail;
    }

    /// Returns the raw stored literal, if any.
    pub fn raw_value(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    /// Removes any stored value.
    pub fn clear(&self) {
        *self.value.lock().unwrap() = None;
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn load_mode(&self) -> Result<Option<Mode>, DsError> {
        let guard = self.value.lock().unwrap();
        Ok(guard.as_deref().and_then(Mode::from_stored))
    }

    async fn store_mode(&self, mode: Mode) -> Result<(), DsError> {
        if *self.fail_on_store.lock().unwrap() {
            return Err(DsError::storage(
                "simulated store_mode failure (set_fail_on_store)",
            ));
        }
        *self.value.lock().unwrap() = Some(mode.as_str().to_string());
        Ok(())
    }
}
