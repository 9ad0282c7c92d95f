//! Utility functions module
//!
//! This module contains logging setup and signal handling.

pub mod logging;
pub mod signals;

// Re-export main functions
pub use logging::init_logging;
pub use signals::shutdown_signal;
