//! Core type definitions for the Telepulse data-source layer

mod log_level;
mod mode;
mod store;

pub use log_level::LogLevel;
pub use mode::Mode;
pub use store::StoreType;
