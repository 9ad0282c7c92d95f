//! Countdown engine

use chrono::Local;
use tracing::{debug, error, info};

use super::TimerController;
use crate::state::EngineState;

impl TimerController {
    /// The start/pause control
    pub(super) fn toggle_timer(&mut self) {
        match self.timer.engine_state() {
            EngineState::Running => self.pause(),
            EngineState::Idle | EngineState::Paused => self.start(),
        }
    }

    /// Start, or resume from pause, using the current field values
    fn start(&mut self) {
        if self.edit.is_editing() {
            self.finish_editing();
        }

        let total = self.timer.total_from_fields();
        if total == 0 {
            if self.timer.engine_state() == EngineState::Paused {
                info!("All fields cleared while paused, returning to idle");
                self.timer.reset();
            } else {
                debug!("Nothing to count down");
            }
            return;
        }

        match self.ticker.start() {
            Ok(generation) => {
                self.tick_generation = Some(generation);
                self.timer.remaining_total_seconds = total;
                self.timer.running = true;
                self.timer.paused = false;
                info!("Countdown running from {}s", total);
            }
            Err(e) => {
                error!("Failed to start countdown: {}", e);
                self.tick_generation = None;
                self.timer.halt();
            }
        }
    }

    fn pause(&mut self) {
        self.ticker.stop();
        self.tick_generation = None;
        self.timer.paused = true;
        info!(
            "Countdown paused with {}s remaining",
            self.timer.remaining_total_seconds
        );
    }

    pub(super) fn tick(&mut self, generation: u64) {
        if self.tick_generation != Some(generation) || !self.timer.is_ticking() {
            debug!("Ignoring stale tick from source {}", generation);
            return;
        }

        self.timer.remaining_total_seconds = self.timer.remaining_total_seconds.saturating_sub(1);
        self.timer.sync_fields_from_total();

        if self.timer.remaining_total_seconds == 0 {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.ticker.stop();
        self.tick_generation = None;
        self.timer.reset();

        let outcome = self.alerts.fire();
        self.alerts_fired += 1;
        self.last_alert = Some(outcome);
        self.last_completed = Some(Local::now());
        info!("Countdown complete, gong: {:?}", outcome);
    }
}
