//! The data-source mode kernel: the controller, its subscription handles,
//! guarded-operation routing, and the per-channel override axis.

pub mod controller;
pub mod guarded;
pub mod overrides;

pub use controller::{ModeController, Subscription};
pub use guarded::GuardedOutcome;
pub use overrides::{ChannelId, ChannelOverrides};
