//! Simulated datasets for demo and trial accounts.
//!
//! One module per feature area of the analytics product, each generating
//! deterministic substitute data from a caller-supplied seed. The whole
//! family is feature-gated so none of it is part of the always-loaded
//! build path; it is reached only through the mode-guarded loaders on
//! [`crate::ModeController`], and every public entry point asserts that
//! the controller is in simulated mode before producing anything.

#[cfg(feature = "simulated-data")]
pub mod channels;
#[cfg(feature = "simulated-data")]
pub mod growth;
#[cfg(feature = "simulated-data")]
pub mod posts;
