// src/core/overrides.rs

//! Per-channel data-source overrides.
//!
//! A second, independent mode axis layered over the global flag: individual
//! channels (for example, ones with MTProto stats collection enabled) can
//! pin a mode that wins over the controller's global value. Overrides are
//! held in memory only; the backend owns the durable per-channel flag and
//! the application seeds this registry from it.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::controller::ModeController;
use crate::types::Mode;

/// Telegram channel identifier as used by the analytics backend.
pub type ChannelId = i64;

/// In-memory registry of per-channel mode overrides.
#[derive(Debug, Default)]
pub struct ChannelOverrides {
    entries: Mutex<HashMap<ChannelId, Mode>>,
}

impl ChannelOverrides {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `mode` for the given channel, replacing any previous override.
    pub fn set(&self, channel: ChannelId, mode: Mode) {
        self.entries.lock().unwrap().insert(channel, mode);
    }

    /// Removes the override for the given channel, returning it if present.
    pub fn clear(&self, channel: ChannelId) -> Option<Mode> {
        self.entries.lock().unwrap().remove(&channel)
    }

    /// The override pinned for the given channel, if any.
    pub fn get(&self, channel: ChannelId) -> Option<Mode> {
        self.entries.lock().unwrap().get(&channel).copied()
    }

    /// Resolves the mode to use for a channel: its override if one is
    /// pinned, otherwise the supplied global mode.
    pub fn effective(&self, global: Mode, channel: ChannelId) -> Mode {
        self.get(channel).unwrap_or(global)
    }

    /// Convenience form of [`ChannelOverrides::effective`] reading the
    /// global mode from a controller.
    pub fn effective_for(&self, controller: &ModeController, channel: ChannelId) -> Mode {
        self.effective(controller.mode(), channel)
    }

    /// Removes every override.
    pub fn clear_all(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of pinned overrides.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether no override is pinned.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
