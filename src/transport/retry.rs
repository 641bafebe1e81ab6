//! Retry policy for submission delivery.

use crate::config::Config;
use std::time::Duration;

/// How many times to retry a transient failure, and how long to wait.
///
/// The wait before retry `n` (1-based) is `initial_backoff * multiplier^(n-1)`,
/// capped at `max_backoff`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub multiplier: f64,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_backoff: config.retry_backoff(),
            ..Self::default()
        }
    }

    /// Whether a failed attempt should be followed by another one.
    ///
    /// `retries_done` counts retries already made, not the first attempt.
    pub fn should_retry(&self, retries_done: u32, transient: bool) -> bool {
        transient && retries_done < self.max_retries
    }

    /// Wait before retry number `retry` (1-based).
    ///
    /// Always within `0..=max_backoff`, whatever the multiplier.
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let scaled = self.initial_backoff.as_secs_f64() * self.multiplier.powi(exponent);
        Duration::try_from_secs_f64(scaled.clamp(0.0, self.max_backoff.as_secs_f64()))
            .unwrap_or(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(5),
        }
    }
}
