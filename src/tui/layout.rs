//! Screen positions of the widget's elements

use crate::{events::ClickTarget, state::Field};

/// Width of the `HH : MM : SS` line
pub const CLOCK_WIDTH: u16 = 12;
const WIDGET_WIDTH: u16 = 24;
const WIDGET_HEIGHT: u16 = 9;

/// A one-row-high span of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl Span {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x.saturating_add(self.width)
    }
}

/// Where every element is drawn for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub origin_x: u16,
    pub origin_y: u16,
}

impl Layout {
    /// Center the widget in a terminal of `columns` x `rows`
    pub fn centered(columns: u16, rows: u16) -> Self {
        Self {
            origin_x: columns.saturating_sub(WIDGET_WIDTH) / 2,
            origin_y: rows.saturating_sub(WIDGET_HEIGHT) / 2,
        }
    }

    pub fn clock_row(&self) -> u16 {
        self.origin_y
    }

    pub fn field(&self, field: Field) -> Span {
        let offset = match field {
            Field::Hours => 0,
            Field::Minutes => 5,
            Field::Seconds => 10,
        };
        Span {
            x: self.origin_x + offset,
            y: self.clock_row(),
            width: 2,
        }
    }

    pub fn start_pause(&self) -> Span {
        Span {
            x: self.origin_x,
            y: self.origin_y + 2,
            width: 9,
        }
    }

    pub fn theme_toggle(&self) -> Span {
        Span {
            x: self.origin_x,
            y: self.origin_y + 4,
            width: 13,
        }
    }

    pub fn status_row(&self) -> u16 {
        self.origin_y + 6
    }

    pub fn help_row(&self) -> u16 {
        self.origin_y + 8
    }

    /// Element under a click at `column`, `row`
    pub fn hit_test(&self, column: u16, row: u16) -> ClickTarget {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.field(*f).contains(column, row))
        {
            ClickTarget::Field(field)
        } else if self.start_pause().contains(column, row) {
            ClickTarget::StartPause
        } else if self.theme_toggle().contains(column, row) {
            ClickTarget::ThemeToggle
        } else {
            ClickTarget::Outside
        }
    }
}
