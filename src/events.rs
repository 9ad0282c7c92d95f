//! Events delivered to the timer controller

use crate::state::Field;

/// Keyboard input the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A single decimal digit character
    Digit(char),
    /// Tab, or Shift+Tab when `reverse` is set
    Tab { reverse: bool },
    Enter,
}

/// What a pointer click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Field(Field),
    StartPause,
    ThemeToggle,
    /// Anywhere that is not an interactive element
    Outside,
}

/// Everything that can happen to the widget in one event-loop turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Key(KeyInput),
    Click(ClickTarget),
    /// One countdown tick from the tick source with the given generation
    Tick(u64),
    /// The system light/dark preference changed
    SystemThemeChanged(bool),
}
