use async_trait::async_trait;
use site_ui_core::error::{TransportError, TransportResult};
use site_ui_core::models::SubmissionPayload;
use site_ui_core::transport::Transport;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted outcome for one attempt.
#[allow(dead_code)]
pub enum Scripted {
    Ok,
    Err(TransportError),
    /// Never settles within any reasonable timeout.
    Hang,
}

/// Mock transport for testing.
///
/// Each attempt pops the next scripted outcome; once the script is empty
/// every attempt succeeds. Every payload is recorded.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    sent: Arc<Mutex<Vec<SubmissionPayload>>>,
    latency: Duration,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
            latency,
        }
    }

    pub fn push(&self, outcome: Scripted) -> &Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }

    pub fn fail_with(&self, error: TransportError) -> &Self {
        self.push(Scripted::Err(error))
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, payload: &SubmissionPayload) -> TransportResult<()> {
        self.sent.lock().unwrap().push(payload.clone());
        let next = self.script.lock().unwrap().pop_front();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match next {
            None | Some(Scripted::Ok) => Ok(()),
            Some(Scripted::Err(e)) => Err(e),
            Some(Scripted::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }
}
