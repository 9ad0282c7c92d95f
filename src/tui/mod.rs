//! Terminal host
//!
//! Wires the controller to crossterm input, the tick source, the system theme
//! listener and shutdown signals, and redraws after every event.

pub mod input;
pub mod layout;
pub mod render;

use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    style::ResetColor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    controller::{ThemeManager, TimerController},
    services::{AlertEmitter, JsonFileStore, PreferenceStore, RodioBackend},
    tasks::{IntervalTicker, PollingThemeListener},
    utils::shutdown_signal,
};
use input::{translate, HostAction};
use layout::Layout;

/// Raw mode, alternate screen and mouse capture for as long as it lives
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self { stdout })
    }

    pub fn stdout(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Build the controller from the configuration
pub async fn build_controller(
    config: &Config,
    events: mpsc::UnboundedSender<crate::events::UiEvent>,
) -> TimerController {
    let prefs_path = config.prefs_path();
    let store: Box<dyn PreferenceStore> = match JsonFileStore::open(&prefs_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Starting with empty preferences: {}", e);
            Box::new(JsonFileStore::empty(prefs_path))
        }
    };

    let system_is_dark = config.system_theme.prefers_dark().await;
    let listener = PollingThemeListener::new(
        config.system_theme,
        config.theme_poll_interval(),
        system_is_dark,
        events.clone(),
    );
    let theme = ThemeManager::load(store, Box::new(listener), system_is_dark);

    let ticker = IntervalTicker::new(config.tick_interval(), events);
    let alerts = AlertEmitter::new(Box::new(RodioBackend::from_path(config.sound.as_deref())));

    TimerController::new(Box::new(ticker), alerts, theme)
}

/// Run the widget until the user quits or a shutdown signal arrives
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut controller = build_controller(config, events_tx).await;

    let mut guard = TerminalGuard::enter()?;
    let (columns, rows) = terminal::size()?;
    let mut layout = Layout::centered(columns, rows);
    let mut terminal_events = EventStream::new();

    let shutdown = async {
        if let Err(e) = shutdown_signal().await {
            warn!("Signal handling unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(shutdown);

    render::draw(guard.stdout(), &controller.view(), &layout)?;
    info!("Timer ready");

    loop {
        tokio::select! {
            Some(event) = events_rx.recv() => controller.dispatch(event),
            next = terminal_events.next() => match next {
                Some(Ok(event)) => match translate(&event, &layout) {
                    HostAction::Dispatch(event) => controller.dispatch(event),
                    HostAction::Resize(columns, rows) => layout = Layout::centered(columns, rows),
                    HostAction::Quit => break,
                    HostAction::Ignore => continue,
                },
                Some(Err(e)) => {
                    error!("Terminal input failed: {}", e);
                    break;
                }
                None => break,
            },
            _ = &mut shutdown => break,
        }

        render::draw(guard.stdout(), &controller.view(), &layout)?;
    }

    controller.shutdown();
    Ok(())
}
