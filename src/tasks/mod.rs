//! Background tasks module
//!
//! This module contains the scheduled tasks that feed events back into the
//! controller: the countdown tick source and the system theme poller.

pub mod theme_watch;
pub mod ticker;

use std::future::Future;

use tokio::{runtime::Handle, sync::oneshot, task::JoinHandle};

use crate::error::ScheduleError;

// Re-export main types
pub use theme_watch::{PollingThemeListener, ThemeListener};
pub use ticker::{IntervalTicker, TickSource};

/// Cancellable handle to a spawned background task.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct TaskHandle {
    cancel: Option<oneshot::Sender<()>>,
    join: JoinHandle<()>,
}

impl TaskHandle {
    /// Spawn `task` on the current runtime, handing it the cancellation receiver
    pub fn spawn<F, Fut>(task: F) -> Result<Self, ScheduleError>
    where
        F: FnOnce(oneshot::Receiver<()>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| ScheduleError::NoRuntime)?;
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let join = runtime.spawn(task(cancel_rx));
        Ok(Self {
            cancel: Some(cancel_tx),
            join,
        })
    }

    /// Stop the task
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        self.join.abort();
    }
}
