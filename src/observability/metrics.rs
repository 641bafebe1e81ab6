//! Contact form metrics.
//!
//! Counters for submission attempts and their outcomes, so a host page can
//! tell how often visitors hit validation errors or a failing endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker shared by a form workflow and its clones.
#[derive(Debug, Clone)]
pub struct FormMetrics {
    submissions_total: Arc<AtomicU64>,
    validation_rejections_total: Arc<AtomicU64>,
    deliveries_succeeded_total: Arc<AtomicU64>,
    deliveries_failed_total: Arc<AtomicU64>,
    retries_total: Arc<AtomicU64>,
    timeouts_total: Arc<AtomicU64>,
}

impl FormMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            validation_rejections_total: Arc::new(AtomicU64::new(0)),
            deliveries_succeeded_total: Arc::new(AtomicU64::new(0)),
            deliveries_failed_total: Arc::new(AtomicU64::new(0)),
            retries_total: Arc::new(AtomicU64::new(0)),
            timeouts_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a submit event, valid or not.
    pub fn track_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a submission rejected by validation.
    pub fn track_validation_rejection(&self, error_count: usize) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::Relaxed);

        tracing::debug!(error_count = error_count, "Submission rejected by validation");
    }

    /// Track a settled delivery.
    pub fn track_delivery(&self, duration_ms: u128, success: bool) {
        if success {
            self.deliveries_succeeded_total
                .fetch_add(1, Ordering::Relaxed);
        } else {
            self.deliveries_failed_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            duration_ms = duration_ms,
            success = success,
            "Delivery settled"
        );
    }

    /// Track a retry after a transient failure.
    pub fn track_retry(&self) {
        self.retries_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track an attempt cut off by the timeout.
    pub fn track_timeout(&self) {
        self.timeouts_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn validation_rejections_total(&self) -> u64 {
        self.validation_rejections_total.load(Ordering::Relaxed)
    }

    pub fn deliveries_succeeded_total(&self) -> u64 {
        self.deliveries_succeeded_total.load(Ordering::Relaxed)
    }

    pub fn deliveries_failed_total(&self) -> u64 {
        self.deliveries_failed_total.load(Ordering::Relaxed)
    }

    pub fn retries_total(&self) -> u64 {
        self.retries_total.load(Ordering::Relaxed)
    }

    pub fn timeouts_total(&self) -> u64 {
        self.timeouts_total.load(Ordering::Relaxed)
    }

    /// Get the delivery failure rate (0.0 to 1.0).
    pub fn delivery_failure_rate(&self) -> f64 {
        let failed = self.deliveries_failed_total() as f64;
        let total = (self.deliveries_succeeded_total() + self.deliveries_failed_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            failed / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Submissions: {}\n\
             Validation Rejections: {}\n\
             Deliveries Succeeded: {}\n\
             Deliveries Failed: {} ({:.2}% failure rate)\n\
             Retries: {}\n\
             Timeouts: {}",
            self.submissions_total(),
            self.validation_rejections_total(),
            self.deliveries_succeeded_total(),
            self.deliveries_failed_total(),
            self.delivery_failure_rate() * 100.0,
            self.retries_total(),
            self.timeouts_total(),
        )
    }
}

impl Default for FormMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer with a specific status and return the elapsed milliseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}
