// src/storage/mod.rs

//! Durable persistence for the data-source mode preference.
//!
//! The mode is a convenience preference, not correctness-critical state:
//! backends report failures, but the controller swallows and logs them
//! rather than surfacing them to callers.

#[cfg(feature = "file-store")]
pub mod file;
#[cfg(feature = "memory-store")]
pub mod memory;

use async_trait::async_trait;

use crate::error::DsError;
use crate::types::Mode;

/// A durable key-value slot holding the persisted data-source mode.
///
/// Implementations store the literal string `"live"` or `"simulated"`.
/// `load_mode` reports an absent or unrecognized stored value as
/// `Ok(None)`; the caller decides the fallback (the controller defaults to
/// [`Mode::Live`]).
#[async_trait]
pub trait PreferenceStore: Send + Sync + std::fmt::Debug {
    /// Read the persisted mode, if any recognizable value is stored.
    async fn load_mode(&self) -> Result<Option<Mode>, DsError>;

    /// Persist the given mode, overwriting any previous value.
    async fn store_mode(&self, mode: Mode) -> Result<(), DsError>;
}
