//! Terminal input translation

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};

use super::layout::Layout;
use crate::events::{ClickTarget, KeyInput, UiEvent};

/// What the event loop should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Dispatch(UiEvent),
    Resize(u16, u16),
    Quit,
    Ignore,
}

/// Convert a crossterm event into a host action
pub fn translate(event: &CrosstermEvent, layout: &Layout) -> HostAction {
    match event {
        CrosstermEvent::Key(key) => translate_key(key),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                HostAction::Dispatch(UiEvent::Click(layout.hit_test(mouse.column, mouse.row)))
            }
            _ => HostAction::Ignore,
        },
        CrosstermEvent::Resize(columns, rows) => HostAction::Resize(*columns, *rows),
        _ => HostAction::Ignore,
    }
}

fn translate_key(key: &KeyEvent) -> HostAction {
    if key.kind != KeyEventKind::Press {
        return HostAction::Ignore;
    }

    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return HostAction::Quit
        }
        KeyCode::Char('q') | KeyCode::Esc => return HostAction::Quit,
        KeyCode::Char(c) if c.is_ascii_digit() => UiEvent::Key(KeyInput::Digit(c)),
        KeyCode::Tab => UiEvent::Key(KeyInput::Tab {
            reverse: key.modifiers.contains(KeyModifiers::SHIFT),
        }),
        KeyCode::BackTab => UiEvent::Key(KeyInput::Tab { reverse: true }),
        KeyCode::Enter => UiEvent::Key(KeyInput::Enter),
        KeyCode::Char(' ') => UiEvent::Click(ClickTarget::StartPause),
        KeyCode::Char('t' | 'T') => UiEvent::Click(ClickTarget::ThemeToggle),
        _ => return HostAction::Ignore,
    };

    HostAction::Dispatch(event)
}
