//! Error types for the Telepulse data-source layer
//!
//! This module defines the error types used throughout the crate. The main
//! error type is `DsError`, which can represent the error conditions that
//! might occur while routing, loading, or persisting data-source state.

use crate::types::Mode;
use thiserror::Error;

/// Main error type for the Telepulse data-source layer
#[derive(Error, Debug)]
pub enum DsError {
    /// JSON serialization/deserialization error
    #[error("Serialization error (JSON): {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A code path that must only run against simulated data was reached
    /// while the controller was in a different mode. Treated as a
    /// programmer error; callers are expected to propagate it, not recover
    /// from it.
    #[error("simulated-mode assertion failed in '{context}': current mode is '{mode}'")]
    ModeAssertion {
        /// Identifies the guarded code path that was misrouted.
        context: String,
        /// The mode the controller was actually in.
        mode: Mode,
    },

    /// Preference-store operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown or unexpected error
    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

/// Result type alias for operations that can fail with a [DsError]
pub type Result<T> = std::result::Result<T, DsError>;

impl DsError {
    /// Create a new error with a string message
    pub fn new<S: Into<String>>(msg: S) -> Self {
        DsError::InvalidInput(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        DsError::InvalidInput(msg.into())
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        DsError::Storage(msg.into())
    }

    /// Create a new mode assertion error for the given guarded context
    pub fn mode_assertion<S: Into<String>>(context: S, mode: Mode) -> Self {
        DsError::ModeAssertion {
            context: context.into(),
            mode,
        }
    }
}

// Implement From for common error types
impl From<&str> for DsError {
    fn from(s: &str) -> Self {
        DsError::new(s)
    }
}

impl From<String> for DsError {
    fn from(s: String) -> Self {
        DsError::new(s)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for DsError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        DsError::Unknown(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DsError {
    fn from(err: tokio::task::JoinError) -> Self {
        DsError::Unknown(format!("Async task error: {}", err))
    }
}
