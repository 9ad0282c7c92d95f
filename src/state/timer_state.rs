//! Timer state structure and management

/// One of the three editable digit groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// Fields in navigation order
    pub const ALL: [Field; 3] = [Field::Hours, Field::Minutes, Field::Seconds];

    /// Largest value the field accepts
    pub fn max(self) -> u32 {
        match self {
            Field::Hours => 99,
            Field::Minutes | Field::Seconds => 59,
        }
    }

    /// Clamp a parsed value into the field's range
    pub fn clamp(self, value: u32) -> u32 {
        value.min(self.max())
    }

    /// Next field for Tab navigation, wrapping from seconds to hours
    pub fn next(self) -> Field {
        match self {
            Field::Hours => Field::Minutes,
            Field::Minutes => Field::Seconds,
            Field::Seconds => Field::Hours,
        }
    }

    /// Previous field for Shift+Tab navigation, wrapping from hours to seconds
    pub fn previous(self) -> Field {
        match self {
            Field::Hours => Field::Seconds,
            Field::Minutes => Field::Hours,
            Field::Seconds => Field::Minutes,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }
}

/// Countdown engine state derived from the running/paused flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Paused,
}

/// Committed countdown values and run flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub remaining_total_seconds: u32,
    pub running: bool,
    pub paused: bool,
}

impl TimerState {
    /// Create an idle timer with every field at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
        }
    }

    /// Write a field value, clamped to its range. Returns the stored value.
    pub fn set(&mut self, field: Field, value: u32) -> u32 {
        let value = field.clamp(value);
        match field {
            Field::Hours => self.hours = value,
            Field::Minutes => self.minutes = value,
            Field::Seconds => self.seconds = value,
        }
        if !self.running {
            self.remaining_total_seconds = self.total_from_fields();
        }
        value
    }

    /// Total seconds described by the three fields
    pub fn total_from_fields(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Derive the three fields from the remaining total
    pub fn sync_fields_from_total(&mut self) {
        let total = self.remaining_total_seconds;
        self.hours = total / 3600;
        self.minutes = (total % 3600) / 60;
        self.seconds = total % 60;
    }

    pub fn engine_state(&self) -> EngineState {
        match (self.running, self.paused) {
            (true, false) => EngineState::Running,
            (true, true) => EngineState::Paused,
            (false, _) => EngineState::Idle,
        }
    }

    /// Whether the countdown is actively ticking (editing is locked)
    pub fn is_ticking(&self) -> bool {
        self.engine_state() == EngineState::Running
    }

    /// Return to an idle, all-zero state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drop back to idle but keep the field values
    pub fn halt(&mut self) {
        self.running = false;
        self.paused = false;
        self.remaining_total_seconds = self.total_from_fields();
    }

    /// Format a field as two digits
    pub fn format_field(&self, field: Field) -> String {
        format!("{:02}", self.get(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle_and_zero() {
        let state = TimerState::new();
        assert_eq!(state.engine_state(), EngineState::Idle);
        assert_eq!(state.total_from_fields(), 0);
        assert_eq!(state.remaining_total_seconds, 0);
    }

    #[test]
    fn test_set_clamps_per_field() {
        let mut state = TimerState::new();
        assert_eq!(state.set(Field::Hours, 120), 99);
        assert_eq!(state.set(Field::Minutes, 75), 59);
        assert_eq!(state.set(Field::Seconds, 60), 59);
        assert_eq!(state.set(Field::Seconds, 7), 7);
    }

    #[test]
    fn test_remaining_follows_fields_while_idle() {
        let mut state = TimerState::new();
        state.set(Field::Hours, 1);
        state.set(Field::Minutes, 2);
        state.set(Field::Seconds, 3);
        assert_eq!(state.remaining_total_seconds, 3723);
    }

    #[test]
    fn test_sync_fields_from_total() {
        let mut state = TimerState::new();
        state.remaining_total_seconds = 3661;
        state.sync_fields_from_total();
        assert_eq!((state.hours, state.minutes, state.seconds), (1, 1, 1));

        state.remaining_total_seconds = 99 * 3600 + 59 * 60 + 59;
        state.sync_fields_from_total();
        assert_eq!((state.hours, state.minutes, state.seconds), (99, 59, 59));
    }

    #[test]
    fn test_engine_state_from_flags() {
        let mut state = TimerState::new();
        state.running = true;
        assert_eq!(state.engine_state(), EngineState::Running);
        assert!(state.is_ticking());
        state.paused = true;
        assert_eq!(state.engine_state(), EngineState::Paused);
        assert!(!state.is_ticking());
    }

    #[test]
    fn test_halt_keeps_fields() {
        let mut state = TimerState::new();
        state.set(Field::Seconds, 40);
        state.running = true;
        state.paused = true;
        state.remaining_total_seconds = 12;
        state.set(Field::Minutes, 2);

        state.halt();
        assert_eq!(state.engine_state(), EngineState::Idle);
        assert_eq!((state.hours, state.minutes, state.seconds), (0, 2, 40));
        assert_eq!(state.remaining_total_seconds, 160);
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(Field::Seconds.next(), Field::Hours);
        assert_eq!(Field::Hours.previous(), Field::Seconds);
        assert_eq!(Field::Minutes.next(), Field::Seconds);
        assert_eq!(Field::Minutes.previous(), Field::Hours);
    }

    #[test]
    fn test_format_field_pads() {
        let mut state = TimerState::new();
        state.set(Field::Minutes, 5);
        assert_eq!(state.format_field(Field::Minutes), "05");
        assert_eq!(state.format_field(Field::Hours), "00");
    }
}
