use std::time::Duration;

/// Delay between two page catalog requests
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Fixed-interval retry policy for the page catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    interval: Duration,
    /// Total number of attempts, `None` retries forever
    max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_RETRY_INTERVAL)
    }
}

impl RetryPolicy {
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Delay before the next attempt, or `None` once the budget is spent.
    pub fn next_delay(&self, failed_attempts: u32) -> Option<Duration> {
        match self.max_attempts {
            Some(max) if failed_attempts >= max => None,
            _ => Some(self.interval),
        }
    }
}
