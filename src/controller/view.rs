//! Display snapshot of the controller

use chrono::{DateTime, Local};

use super::TimerController;
use crate::state::{EngineState, Field, Theme};

/// Everything a renderer needs to draw the widget
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub selected: Option<Field>,
    pub button_label: &'static str,
    pub theme: Theme,
    pub engine: EngineState,
    pub last_completed: Option<DateTime<Local>>,
}

impl DisplaySnapshot {
    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Hours => &self.hours,
            Field::Minutes => &self.minutes,
            Field::Seconds => &self.seconds,
        }
    }

    /// `HH:MM:SS`
    pub fn clock(&self) -> String {
        format!("{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

impl TimerController {
    pub fn view(&self) -> DisplaySnapshot {
        let selected = self.edit.active_field();
        let text = |field: Field| match (selected, self.edit.pending_display()) {
            (Some(active), Some(pending)) if active == field => pending,
            _ => self.timer.format_field(field),
        };
        let engine = self.timer.engine_state();

        DisplaySnapshot {
            hours: text(Field::Hours),
            minutes: text(Field::Minutes),
            seconds: text(Field::Seconds),
            selected,
            button_label: if engine == EngineState::Running { "Pause" } else { "Start" },
            theme: self.theme.theme(),
            engine,
            last_completed: self.last_completed,
        }
    }
}
