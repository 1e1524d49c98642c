//! AniList request pacing.

use std::time::{Duration, Instant};

/// Default minimum interval between requests.
///
/// AniList allows 90 requests per minute; 700ms keeps a small margin.
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(700);

/// Minimum-interval rate limiter shared by all requests of one client.
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum interval between requests.
    min_interval: Duration,
    /// Start of the previous request.
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum interval.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Creates a limiter with the default interval (700ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Sleeps until the next request may start, then records it.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let delay = self.min_interval.saturating_sub(elapsed);
                tracing::trace!(delay_ms = delay.as_millis(), "rate limiter sleeping");
                tokio::time::sleep(delay).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}
