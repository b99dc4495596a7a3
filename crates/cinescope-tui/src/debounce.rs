//! Trailing-edge debouncer backed by a sleeping tokio task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Default quiet period before a search runs.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Delivers a value on `tx` once no newer value arrived for `delay`.
///
/// Each `call` aborts the pending timer task and starts a new one.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer sending to `tx`.
    #[must_use]
    pub const fn new(delay: Duration, tx: UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Returns the quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value`, replacing any pending one.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(value).is_err() {
                tracing::debug!("debounce receiver dropped");
            }
        }));
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a value is waiting for its quiet period to end.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
