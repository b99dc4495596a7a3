//! Request pacing for the TMDB API.

use std::time::Duration;

use tokio::time::Instant;

/// Default minimum interval between requests (~40 req/s).
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Spaces consecutive TMDB requests at least `min_interval` apart.
///
/// TMDB enforces roughly 40 requests per second across all endpoints.
#[derive(Debug)]
pub struct RequestPacer {
    /// Minimum interval between requests.
    min_interval: Duration,
    /// Earliest instant the next request may start.
    next_slot: Option<Instant>,
}

impl RequestPacer {
    /// Creates a pacer with the given minimum interval.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: None,
        }
    }

    /// Creates a pacer with the default interval (25ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Waits for the next request slot and reserves the one after it.
    pub async fn pace(&mut self) {
        if let Some(slot) = self.next_slot {
            tokio::time::sleep_until(slot).await;
        }
        self.next_slot = Instant::now().checked_add(self.min_interval);
    }
}
