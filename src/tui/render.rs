//! Drawing the widget with crossterm

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Colors, Print, SetAttribute, SetColors},
    terminal::{Clear, ClearType},
};

use super::layout::Layout;
use crate::{
    controller::DisplaySnapshot,
    state::{EngineState, Field, Theme},
};

const HELP: &str = "0-9 edit  Tab/Shift+Tab move  Enter set  Space start/pause  t theme  q quit";

/// Foreground and background for a theme
pub fn palette(theme: Theme) -> Colors {
    match theme {
        Theme::Dark => Colors::new(Color::White, Color::Black),
        Theme::Light => Colors::new(Color::Black, Color::White),
    }
}

/// Redraw the whole screen from a snapshot
pub fn draw<W: Write>(out: &mut W, view: &DisplaySnapshot, layout: &Layout) -> io::Result<()> {
    queue!(out, SetColors(palette(view.theme)), Clear(ClearType::All))?;

    for field in Field::ALL {
        let span = layout.field(field);
        queue!(out, MoveTo(span.x, span.y))?;
        if view.selected == Some(field) {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(view.field_text(field)),
                SetAttribute(Attribute::NoReverse)
            )?;
        } else {
            queue!(out, Print(view.field_text(field)))?;
        }
        if field != Field::Seconds {
            queue!(out, Print(" : "))?;
        }
    }

    let button = layout.start_pause();
    queue!(
        out,
        MoveTo(button.x, button.y),
        Print(format!("[ {:<5} ]", view.button_label))
    )?;

    let toggle = layout.theme_toggle();
    let mark = if view.theme == Theme::Dark { 'x' } else { ' ' };
    queue!(out, MoveTo(toggle.x, toggle.y), Print(format!("[{}] Dark mode", mark)))?;

    queue!(
        out,
        MoveTo(layout.origin_x, layout.status_row()),
        Print(status_line(view)),
        MoveTo(0, layout.help_row()),
        SetAttribute(Attribute::Dim),
        Print(HELP),
        SetAttribute(Attribute::Reset)
    )?;

    out.flush()
}

/// Engine state plus the time of the last gong
pub fn status_line(view: &DisplaySnapshot) -> String {
    let state = match view.engine {
        EngineState::Idle => "Idle",
        EngineState::Running => "Running",
        EngineState::Paused => "Paused",
    };
    match view.last_completed {
        Some(at) => format!("{}  (last gong {})", state, at.format("%H:%M:%S")),
        None => state.to_string(),
    }
}
