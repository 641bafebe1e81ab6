//! HTTP transport for contact submissions.
//!
//! The request itself is made with a synchronous `ureq` agent. The async
//! [`HttpTransport`] runs it on tokio's blocking pool via
//! `tokio::task::spawn_blocking` so the runtime thread is never blocked.

use super::Transport;
use crate::error::{TransportError, TransportResult};
use crate::models::SubmissionPayload;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Synchronous sender that POSTs the JSON payload to a single endpoint.
#[derive(Clone)]
pub struct SyncHttpSender {
    /// Endpoint URL
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl SyncHttpSender {
    /// Create a sender for `endpoint` whose requests give up after `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            endpoint: endpoint.into(),
            agent: Arc::new(agent),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload. Any 2xx status is success; the body is ignored.
    pub fn send(&self, payload: &SubmissionPayload) -> TransportResult<()> {
        let start = Instant::now();
        let body = serde_json::to_value(payload)?;

        tracing::debug!("POST {}", self.endpoint);

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(body)
            .map_err(map_error);

        let duration_ms = start.elapsed().as_millis();
        match &result {
            Ok(response) => {
                tracing::debug!(
                    status = response.status(),
                    duration_ms = duration_ms,
                    "POST {} - Success",
                    self.endpoint
                );
            }
            Err(e) => {
                tracing::error!(duration_ms = duration_ms, "POST {} - Error: {:?}", self.endpoint, e);
            }
        }

        result.map(|_| ())
    }
}

/// Map a ureq error to a TransportError.
fn map_error(error: ureq::Error) -> TransportError {
    match error {
        ureq::Error::Status(status, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            TransportError::ApiError { status, message }
        }
        ureq::Error::Transport(transport) => match transport.kind() {
            // Nothing was sent, so these are safe to retry.
            ureq::ErrorKind::Dns
            | ureq::ErrorKind::ConnectionFailed
            | ureq::ErrorKind::ProxyConnect => TransportError::HttpError(transport.to_string()),
            ureq::ErrorKind::Io => TransportError::Timeout,
            _ => TransportError::Other(transport.to_string()),
        },
    }
}

/// Async transport around [`SyncHttpSender`].
#[derive(Clone)]
pub struct HttpTransport {
    sender: Arc<SyncHttpSender>,
}

impl HttpTransport {
    pub fn new(sender: SyncHttpSender) -> Self {
        Self {
            sender: Arc::new(sender),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: &SubmissionPayload) -> TransportResult<()> {
        let sender = self.sender.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || sender.send(&payload))
            .await
            .map_err(|e| TransportError::Other(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_keeps_endpoint() {
        let sender = SyncHttpSender::new("https://forms.example.com/contact", Duration::from_secs(5));
        assert_eq!(sender.endpoint(), "https://forms.example.com/contact");

        // Should be able to clone
        let _transport = HttpTransport::new(sender).clone();
    }
}
