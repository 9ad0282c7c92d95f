//! Timer controller
//!
//! Owns the timer, the edit session, the theme and the alert emitter, and
//! routes every [`UiEvent`] to the handler responsible for it. All state
//! changes happen synchronously inside [`TimerController::dispatch`].

mod countdown;
mod input;
pub mod theme;
pub mod view;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::{
    events::{ClickTarget, UiEvent},
    services::{AlertEmitter, AlertOutcome},
    state::{EditSession, EngineState, ThemePreference, TimerState},
    tasks::TickSource,
};

pub use theme::ThemeManager;
pub use view::DisplaySnapshot;

/// The countdown widget
pub struct TimerController {
    timer: TimerState,
    edit: EditSession,
    ticker: Box<dyn TickSource>,
    /// Generation of the tick source currently driving the countdown
    tick_generation: Option<u64>,
    alerts: AlertEmitter,
    theme: ThemeManager,
    alerts_fired: u32,
    last_alert: Option<AlertOutcome>,
    last_completed: Option<DateTime<Local>>,
}

impl TimerController {
    /// Create an idle controller with all fields at zero
    pub fn new(ticker: Box<dyn TickSource>, alerts: AlertEmitter, theme: ThemeManager) -> Self {
        Self {
            timer: TimerState::new(),
            edit: EditSession::new(),
            ticker,
            tick_generation: None,
            alerts,
            theme,
            alerts_fired: 0,
            last_alert: None,
            last_completed: None,
        }
    }

    /// Route one event to its handler
    pub fn dispatch(&mut self, event: UiEvent) {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::Key(key) => self.handle_key(key),
            UiEvent::Click(ClickTarget::Field(field)) => self.select_field(field),
            UiEvent::Click(ClickTarget::StartPause) => self.toggle_timer(),
            UiEvent::Click(ClickTarget::ThemeToggle) => self.theme.toggle(),
            UiEvent::Click(ClickTarget::Outside) => self.handle_focus_loss(),
            UiEvent::Tick(generation) => self.tick(generation),
            UiEvent::SystemThemeChanged(is_dark) => self.theme.apply_system(is_dark),
        }
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn engine_state(&self) -> EngineState {
        self.timer.engine_state()
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn theme_preference(&self) -> ThemePreference {
        self.theme.preference()
    }

    /// Whether a tick source is currently scheduled
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Number of completion alerts attempted so far
    pub fn alerts_fired(&self) -> u32 {
        self.alerts_fired
    }

    pub fn last_alert(&self) -> Option<AlertOutcome> {
        self.last_alert
    }

    pub fn last_completed(&self) -> Option<DateTime<Local>> {
        self.last_completed
    }

    /// Stop background work before the controller goes away
    pub fn shutdown(&mut self) {
        self.ticker.stop();
        self.tick_generation = None;
        self.theme.shutdown();
    }
}
