// src/core/guarded.rs

/// Result of a guarded operation whose live producer was omitted.
///
/// Routing must never silently substitute simulated data for a live
/// request, so when the controller is in live mode and only a simulated
/// producer exists, the call resolves to the explicit `SkippedLive`
/// sentinel instead of running anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardedOutcome<T> {
    /// The simulated producer ran and yielded a value.
    Completed(T),
    /// The controller was in live mode; no producer was invoked.
    SkippedLive,
}

impl<T> GuardedOutcome<T> {
    /// The produced value, if the simulated producer ran.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::SkippedLive => None,
        }
    }

    /// Whether the operation was skipped because the controller was live.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedLive)
    }
}
