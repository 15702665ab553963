// src/core/controller.rs

//! The single authority for the current data-source mode.
//!
//! [`ModeController`] is an explicitly constructed, injectable handle
//! rather than a module-level global, so tests and embedding applications
//! can hold independent instances without cross-test leakage. Clones share
//! one underlying flag.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, Weak};

use log::warn;
use uuid::Uuid;

use crate::core::guarded::GuardedOutcome;
use crate::error::{DsError, Result};
use crate::storage::PreferenceStore;
use crate::types::Mode;

/// Callback invoked synchronously with the new mode on every transition.
pub type ModeChangeFn = dyn Fn(Mode) + Send + Sync + 'static;

struct SubscriberEntry {
    id: Uuid,
    callback: Arc<ModeChangeFn>,
}

struct Inner {
    mode: Mutex<Mode>,
    subscribers: Mutex<Vec<SubscriberEntry>>,
    store: Arc<dyn PreferenceStore>,
}

/// Single authority for the current data-source mode.
///
/// Holds the live/simulated flag, notifies registered subscribers of
/// changes, and routes dual-path operations. All reads and the notification
/// step are synchronous; only caller-supplied producers and the persistence
/// write are asynchronous.
#[derive(Clone)]
pub struct ModeController {
    inner: Arc<Inner>,
}

impl fmt::Debug for ModeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeController")
            .field("mode", &self.mode())
            .field("subscribers", &self.inner.subscribers.lock().unwrap().len())
            .finish()
    }
}

impl ModeController {
    /// Creates a controller seeded from the store, falling back to
    /// [`Mode::Live`] when nothing recognizable is persisted.
    ///
    /// The store is read exactly once, at construction.
    pub async fn load(store: Arc<dyn PreferenceStore>) -> Self {
        Self::load_with_default(store, Mode::Live).await
    }

    /// Like [`ModeController::load`], with an explicit fallback mode.
    ///
    /// A store read failure is logged and treated the same as an absent
    /// value; startup never fails on a lost preference.
    pub async fn load_with_default(store: Arc<dyn PreferenceStore>, default_mode: Mode) -> Self {
        let mode = match store.load_mode().await {
            Ok(Some(stored)) => stored,
            Ok(None) => default_mode,
            Err(e) => {
                warn!(
                    "failed to read persisted data-source mode, using '{}': {}",
                    default_mode, e
                );
                default_mode
            }
        };
        Self::with_mode(store, mode)
    }

    /// Creates a controller with an explicit initial mode, skipping the
    /// store read. Useful in tests and in the demo CLI.
    pub fn with_mode(store: Arc<dyn PreferenceStore>, mode: Mode) -> Self {
        Self {
            inner: Arc::new(Inner {
                mode: Mutex::new(mode),
                subscribers: Mutex::new(Vec::new()),
                store,
            }),
        }
    }

    /// Returns the current mode. Synchronous, never fails.
    pub fn mode(&self) -> Mode {
        *self.inner.mode.lock().unwrap()
    }

    /// Sets the mode and synchronously notifies every registered
    /// subscriber, in registration order, before returning.
    ///
    /// Notification iterates over a snapshot taken at the start of the
    /// call, so a callback registered during notification is not invoked
    /// for the in-flight transition. No lock is held while callbacks run;
    /// a callback may itself call back into the controller.
    ///
    /// The new value is persisted best-effort in the background. A storage
    /// failure is logged, never surfaced: the mode is a convenience
    /// preference, not correctness-critical state.
    pub fn set_mode(&self, new_mode: Mode) {
        let snapshot: Vec<Arc<ModeChangeFn>> = {
            let subscribers = self.inner.subscribers.lock().unwrap();
            subscribers
                .iter()
                .map(|entry| Arc::clone(&entry.callback))
                .collect()
        };

        {
            let mut mode = self.inner.mode.lock().unwrap();
            *mode = new_mode;
        }

        for callback in snapshot {
            callback(new_mode);
        }

        self.spawn_persist(new_mode);
    }

    /// Registers a callback invoked on every future mode transition.
    ///
    /// The returned [`Subscription`] removes the callback when cancelled or
    /// dropped; tie it to the lifetime of the consuming component so a
    /// destroyed consumer is never called back.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Mode) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        {
            let mut subscribers = self.inner.subscribers.lock().unwrap();
            subscribers.push(SubscriberEntry {
                id,
                callback: Arc::new(callback),
            });
        }
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Fails with [`DsError::ModeAssertion`] unless the controller is in
    /// simulated mode.
    ///
    /// Place at the top of any function that must never execute against
    /// live infrastructure. This is a fail-fast contract: let the error
    /// propagate and abort the code path instead of catching it.
    pub fn assert_simulated(&self, context: &str) -> Result<()> {
        let mode = self.mode();
        if mode.is_simulated() {
            Ok(())
        } else {
            Err(DsError::mode_assertion(context, mode))
        }
    }

    /// Invokes exactly one of the two producers, selected by the mode read
    /// once at call time. A mode switch while the chosen producer is in
    /// flight does not re-route the call.
    pub async fn run_guarded<T, SP, SFut, LP, LFut>(&self, simulated: SP, live: LP) -> Result<T>
    where
        SP: FnOnce() -> SFut,
        SFut: Future<Output = Result<T>>,
        LP: FnOnce() -> LFut,
        LFut: Future<Output = Result<T>>,
    {
        match self.mode() {
            Mode::Simulated => simulated().await,
            Mode::Live => live().await,
        }
    }

    /// The "live producer omitted" form of [`ModeController::run_guarded`].
    ///
    /// In live mode this resolves to [`GuardedOutcome::SkippedLive`]
    /// without invoking the producer; simulated data is never substituted
    /// for a live request.
    pub async fn run_simulated<T, SP, SFut>(&self, simulated: SP) -> Result<GuardedOutcome<T>>
    where
        SP: FnOnce() -> SFut,
        SFut: Future<Output = Result<T>>,
    {
        match self.mode() {
            Mode::Simulated => Ok(GuardedOutcome::Completed(simulated().await?)),
            Mode::Live => Ok(GuardedOutcome::SkippedLive),
        }
    }

    /// Opportunistically loads a simulated dataset.
    ///
    /// Unlike [`ModeController::assert_simulated`] this guard is non-fatal:
    /// in live mode it logs a warning and returns `Ok(None)` so it can be
    /// called from mode-agnostic shared code. In simulated mode the loader
    /// runs and its error, if any, is propagated unchanged; a malformed
    /// simulated dataset is a real bug, not a mode mismatch.
    pub async fn load_simulated<T, L, Fut>(&self, context: &str, loader: L) -> Result<Option<T>>
    where
        L: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if !self.mode().is_simulated() {
            warn!(
                "simulated dataset '{}' requested in live mode; skipping load",
                context
            );
            return Ok(None);
        }
        loader().await.map(Some)
    }

    /// Writes the current mode to the store and waits for the result.
    ///
    /// `set_mode` already persists in the background; use this where a
    /// confirmed durability point is needed (shutdown paths, tests).
    pub async fn persist(&self) -> Result<()> {
        let mode = self.mode();
        self.inner.store.store_mode(mode).await
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }

    fn spawn_persist(&self, mode: Mode) {
        let store = Arc::clone(&self.inner.store);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = store.store_mode(mode).await {
                        warn!("failed to persist data-source mode '{}': {}", mode, e);
                    }
                });
            }
            Err(_) => {
                warn!(
                    "no async runtime available; data-source mode '{}' not persisted",
                    mode
                );
            }
        }
    }
}

/// Handle tying a registered mode-change callback to its owner's lifetime.
///
/// Dropping (or explicitly cancelling) the handle unregisters the callback,
/// guaranteeing it is never invoked for any later transition.
pub struct Subscription {
    id: Uuid,
    inner: Weak<Inner>,
}

impl Subscription {
    /// Opaque identifier of this subscription.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Removes the callback. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut subscribers = inner.subscribers.lock().unwrap();
            subscribers.retain(|entry| entry.id != self.id);
        }
    }
}
