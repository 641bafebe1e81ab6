//! Stand-in transport with a fixed latency.

use super::Transport;
use crate::error::{TransportError, TransportResult};
use crate::models::SubmissionPayload;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

/// Transport that waits for a fixed latency and then succeeds.
///
/// Used when no endpoint is configured. [`SimulatedTransport::failing`]
/// gives a variant that always fails after the same delay.
#[derive(Debug)]
pub struct SimulatedTransport {
    latency: Duration,
    fail: AtomicBool,
    sent: AtomicU64,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail: AtomicBool::new(false),
            sent: AtomicU64::new(0),
        }
    }

    /// A transport whose every attempt fails after `latency`.
    pub fn failing(latency: Duration) -> Self {
        let transport = Self::new(latency);
        transport.set_failing(true);
        transport
    }

    /// Switch between succeeding and failing.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    /// Number of attempts made so far.
    pub fn sent_total(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn send(&self, payload: &SubmissionPayload) -> TransportResult<()> {
        self.sent.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.latency).await;

        if self.fail.load(Ordering::Relaxed) {
            return Err(TransportError::Other("simulated failure".to_string()));
        }

        tracing::info!(
            email = %payload.email,
            submitted_at = %payload.submitted_at,
            "Simulated submission delivered"
        );
        Ok(())
    }
}
