//! Cancellable debounce scheduling.
//!
//! A `Debouncer` holds at most one armed task. Scheduling returns a handle
//! and cancels whatever was armed before, so a burst of requests collapses
//! into the single most recent one. Intermediate requests are dropped
//! outright, never queued or merged.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};

/// Handle to a scheduled task.
pub struct DebounceHandle {
    inner: JoinHandle<()>,
}

impl DebounceHandle {
    /// Cancels the task if it has not fired yet.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Returns true once the task has run or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Waits until the task has run or been cancelled.
    pub async fn wait(self) {
        // A cancelled task resolves to a JoinError; either way it is settled.
        let _ = self.inner.await;
    }
}

/// Schedules a single pending task after a fixed quiet period.
pub struct Debouncer {
    window: Duration,
    armed: Mutex<Option<AbortHandle>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed: Mutex::new(None),
        }
    }

    /// Arms `task` to run after the quiet period, cancelling any previously
    /// armed task first.
    pub fn schedule<F>(&self, task: F) -> DebounceHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut armed = self.armed.lock().unwrap();
        if let Some(prev) = armed.take() {
            prev.abort();
        }

        let window = self.window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            task.await;
        });
        *armed = Some(handle.abort_handle());

        DebounceHandle { inner: handle }
    }
}
