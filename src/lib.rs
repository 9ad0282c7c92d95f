//! Tab Timer - A keyboard-driven countdown timer
//!
//! This library provides the timer controller (digit-group editing, the
//! countdown engine, the completion gong and the theme preference) and a
//! terminal host that drives it.

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod services;
pub mod state;
pub mod tasks;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::{DisplaySnapshot, ThemeManager, TimerController};
pub use events::{ClickTarget, KeyInput, UiEvent};
pub use utils::signals::shutdown_signal;
