use std::time::{Duration, Instant};

/// Minimum-interval gate for outbound completion requests.
///
/// A single timestamp of the last attempted call. The clock instant is
/// passed in explicitly so the limiter can be driven in tests without
/// sleeping.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// `Ok` when a request may be issued at `now`, otherwise the
    /// remaining wait. Never updates the timestamp.
    pub fn check(&self, now: Instant) -> Result<(), Duration> {
        match self.last_request {
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                if elapsed < self.min_interval {
                    Err(self.min_interval - elapsed)
                } else {
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }

    /// Record that a request is being issued at `now`. Called for every
    /// attempt that passes the gate, not only successful ones, so failed
    /// calls count against the limit too.
    pub fn mark(&mut self, now: Instant) {
        self.last_request = Some(now);
    }

    pub fn last_request(&self) -> Option<Instant> {
        self.last_request
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
