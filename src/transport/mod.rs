//! Delivery of validated submissions.
//!
//! A [`Transport`] takes the JSON payload of a contact submission and settles
//! once, successfully or not. Timeouts and retries are applied around it by
//! the form workflow, using a [`RetryPolicy`].

mod http;
mod retry;
mod simulated;

pub use http::{HttpTransport, SyncHttpSender};
pub use retry::RetryPolicy;
pub use simulated::SimulatedTransport;

use crate::config::Config;
use crate::error::TransportResult;
use crate::models::SubmissionPayload;
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous channel that delivers a submission to its destination.
///
/// One call is one attempt. Implementations should not retry internally.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &SubmissionPayload) -> TransportResult<()>;
}

/// Build the transport described by the configuration.
///
/// An endpoint URL selects the HTTP transport; without one, submissions go to
/// the simulated transport with the configured latency.
pub fn from_config(config: &Config) -> Arc<dyn Transport> {
    match &config.endpoint_url {
        Some(url) => {
            tracing::info!(endpoint = %url, "Using HTTP contact transport");
            Arc::new(HttpTransport::new(SyncHttpSender::new(
                url.clone(),
                config.request_timeout(),
            )))
        }
        None => {
            tracing::info!(
                latency_ms = config.simulated_latency_ms,
                "No contact endpoint configured, using simulated transport"
            );
            Arc::new(SimulatedTransport::new(config.simulated_latency()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactSubmission;
    use crate::EmailAddress;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_default_config_uses_simulated_latency() {
        let config = Config {
            simulated_latency_ms: 800,
            ..Config::default()
        };
        let transport = from_config(&config);
        let payload = ContactSubmission {
            name: "Jo".to_string(),
            email: EmailAddress::new("jo@x.co").unwrap(),
            message: "Hello there friend".to_string(),
            phone: None,
        }
        .to_payload(chrono::Utc::now());

        let start = tokio::time::Instant::now();
        transport.send(&payload).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(800));
    }
}
