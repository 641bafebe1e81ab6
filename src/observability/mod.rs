//! Observability for the contact form: counters and log setup.
//!
//! Logs go to stderr through `tracing`; the counters are atomics that
//! an embedding can read or print with [`FormMetrics::summary`].

pub mod metrics;

pub use metrics::{FormMetrics, Timer};

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.log_level, "Logging initialized");
    }
}
