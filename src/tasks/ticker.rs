//! Countdown tick source

use std::time::Duration;

use tokio::{
    sync::mpsc::UnboundedSender,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use super::TaskHandle;
use crate::{error::ScheduleError, events::UiEvent};

/// A repeating tick schedule that can be started and stopped.
///
/// Only one schedule may be active at a time. Each start returns a new
/// generation number that identifies the ticks it produces.
pub trait TickSource {
    fn start(&mut self) -> Result<u64, ScheduleError>;
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Tick source backed by a tokio interval task that sends
/// [`UiEvent::Tick`] into the controller's event channel
pub struct IntervalTicker {
    period: Duration,
    events: UnboundedSender<UiEvent>,
    generation: u64,
    handle: Option<TaskHandle>,
}

impl IntervalTicker {
    pub fn new(period: Duration, events: UnboundedSender<UiEvent>) -> Self {
        Self {
            period,
            events,
            generation: 0,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) -> Result<u64, ScheduleError> {
        if self.handle.is_some() {
            return Err(ScheduleError::AlreadyRunning);
        }

        let generation = self.generation + 1;
        let period = self.period;
        let events = self.events.clone();

        let handle = TaskHandle::spawn(move |mut cancel| async move {
            // First tick lands one full period after start
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if events.send(UiEvent::Tick(generation)).is_err() {
                            debug!("Event channel closed, stopping tick source {}", generation);
                            break;
                        }
                    }
                    _ = &mut cancel => {
                        debug!("Tick source {} cancelled", generation);
                        break;
                    }
                }
            }
        })?;

        self.generation = generation;
        self.handle = Some(handle);
        info!("Started tick source {} every {:?}", generation, period);
        Ok(generation)
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            info!("Stopped tick source {}", self.generation);
        }
    }

    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{sync::mpsc, time::timeout};

    const PERIOD: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn test_ticks_carry_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::new(PERIOD, tx);

        let generation = ticker.start().unwrap();
        assert_eq!(generation, 1);
        assert!(ticker.is_active());

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(UiEvent::Tick(1)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::new(PERIOD, tx);

        ticker.start().unwrap();
        assert!(matches!(ticker.start(), Err(ScheduleError::AlreadyRunning)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences_and_restart_bumps_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = IntervalTicker::new(PERIOD, tx);

        ticker.start().unwrap();
        assert_eq!(rx.recv().await, Some(UiEvent::Tick(1)));

        ticker.stop();
        assert!(!ticker.is_active());
        assert!(timeout(PERIOD * 5, rx.recv()).await.is_err());

        assert_eq!(ticker.start().unwrap(), 2);
        assert_eq!(rx.recv().await, Some(UiEvent::Tick(2)));
    }
}
