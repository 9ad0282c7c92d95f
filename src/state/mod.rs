//! State management module
//!
//! This module contains the timer, edit-session and theme data structures.

pub mod edit_session;
pub mod theme;
pub mod timer_state;

// Re-export main types
pub use edit_session::{Commit, EditSession};
pub use theme::{Theme, ThemePreference, THEME_KEY};
pub use timer_state::{EngineState, Field, TimerState};
