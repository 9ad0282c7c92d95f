//! System theme listener

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, time::interval};
use tracing::{debug, info, warn};

use super::TaskHandle;
use crate::{events::UiEvent, services::SystemThemeProbe};

/// Live notifications of the system light/dark preference
pub trait ThemeListener {
    fn listen(&mut self);
    fn stop(&mut self);
    fn is_listening(&self) -> bool;
}

/// Polls the system preference and sends [`UiEvent::SystemThemeChanged`]
/// whenever it differs from the last known value
pub struct PollingThemeListener {
    probe: SystemThemeProbe,
    period: Duration,
    last_known: bool,
    events: UnboundedSender<UiEvent>,
    handle: Option<TaskHandle>,
}

impl PollingThemeListener {
    pub fn new(
        probe: SystemThemeProbe,
        period: Duration,
        last_known: bool,
        events: UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            probe,
            period,
            last_known,
            events,
            handle: None,
        }
    }
}

impl ThemeListener for PollingThemeListener {
    fn listen(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let probe = self.probe;
        let period = self.period;
        let events = self.events.clone();
        let mut last_known = self.last_known;

        let spawned = TaskHandle::spawn(move |mut cancel| async move {
            let mut interval = interval(period);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let is_dark = probe.prefers_dark().await;
                        if is_dark == last_known {
                            continue;
                        }
                        debug!("System theme changed, dark={}", is_dark);
                        last_known = is_dark;
                        if events.send(UiEvent::SystemThemeChanged(is_dark)).is_err() {
                            break;
                        }
                    }
                    _ = &mut cancel => break,
                }
            }
        });

        match spawned {
            Ok(handle) => {
                info!("Listening for system theme changes every {:?}", period);
                self.handle = Some(handle);
            }
            Err(e) => warn!("Could not start system theme listener: {}", e),
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            info!("Stopped system theme listener");
        }
    }

    fn is_listening(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{sync::mpsc, time::timeout};

    const PERIOD: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn test_reports_change_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut listener = PollingThemeListener::new(SystemThemeProbe::Dark, PERIOD, false, tx);

        listener.listen();
        assert!(listener.is_listening());
        assert_eq!(rx.recv().await, Some(UiEvent::SystemThemeChanged(true)));
        assert!(timeout(PERIOD * 4, rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_preference_is_quiet() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut listener = PollingThemeListener::new(SystemThemeProbe::Light, PERIOD, false, tx);

        listener.listen();
        assert!(timeout(PERIOD * 4, rx.recv()).await.is_err());
        listener.stop();
        assert!(!listener.is_listening());
    }
}
