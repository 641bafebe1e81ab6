//! Configuration management for the site UI core.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every setting is optional; a missing variable falls back to the
//! default the site has always used.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the contact form and view controller.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact endpoint. When unset, submissions go to the simulated transport.
    pub endpoint_url: Option<String>,

    /// Per-attempt submission timeout in milliseconds (default: 10000)
    pub request_timeout_ms: u64,

    /// Retries after a transient failure (default: 2)
    pub max_retries: u32,

    /// Backoff before the first retry in milliseconds, doubled per retry (default: 250)
    pub retry_backoff_ms: u64,

    /// Latency of the simulated transport in milliseconds (default: 1500)
    pub simulated_latency_ms: u64,

    /// How long the form error alert stays visible, in seconds (default: 10)
    pub error_alert_ttl_secs: u64,

    /// Delay before the live region is cleared, in milliseconds (default: 1000)
    pub announce_clear_ms: u64,

    /// Viewport width above which the mobile menu closes (default: 768)
    pub mobile_breakpoint_px: u32,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_ENDPOINT_URL`: HTTP(S) endpoint for submissions
    /// - `REQUEST_TIMEOUT_MS`: per-attempt timeout (default: 10000)
    /// - `MAX_RETRIES`: retries after transient failures (default: 2)
    /// - `RETRY_BACKOFF_MS`: initial retry backoff (default: 250)
    /// - `SIMULATED_LATENCY_MS`: simulated transport latency (default: 1500)
    /// - `ERROR_ALERT_TTL_SECS`: error alert lifetime (default: 10)
    /// - `ANNOUNCE_CLEAR_MS`: live region clear delay (default: 1000)
    /// - `MOBILE_BREAKPOINT_PX`: mobile menu breakpoint (default: 768)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let endpoint_url = match env::var("CONTACT_ENDPOINT_URL") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACT_ENDPOINT_URL".to_string(),
                        reason: "Must start with http:// or https://".to_string(),
                    });
                }
                Some(url)
            }
            Err(_) => None,
        };

        let defaults = Config::default();

        let request_timeout_ms =
            Self::parse_env_u64("REQUEST_TIMEOUT_MS", defaults.request_timeout_ms)?;
        if request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let max_retries = Self::parse_env_u32("MAX_RETRIES", defaults.max_retries)?;
        let retry_backoff_ms = Self::parse_env_u64("RETRY_BACKOFF_MS", defaults.retry_backoff_ms)?;
        let simulated_latency_ms =
            Self::parse_env_u64("SIMULATED_LATENCY_MS", defaults.simulated_latency_ms)?;
        // Without an endpoint every submission goes to the simulated transport.
        if endpoint_url.is_none() && simulated_latency_ms >= request_timeout_ms {
            return Err(ConfigError::InvalidValue {
                var: "SIMULATED_LATENCY_MS".to_string(),
                reason: format!(
                    "Must be less than REQUEST_TIMEOUT_MS ({}), got: {}",
                    request_timeout_ms, simulated_latency_ms
                ),
            });
        }
        let error_alert_ttl_secs =
            Self::parse_env_u64("ERROR_ALERT_TTL_SECS", defaults.error_alert_ttl_secs)?;
        let announce_clear_ms =
            Self::parse_env_u64("ANNOUNCE_CLEAR_MS", defaults.announce_clear_ms)?;
        let mobile_breakpoint_px =
            Self::parse_env_u32("MOBILE_BREAKPOINT_PX", defaults.mobile_breakpoint_px)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            endpoint_url,
            request_timeout_ms,
            max_retries,
            retry_backoff_ms,
            simulated_latency_ms,
            error_alert_ttl_secs,
            announce_clear_ms,
            mobile_breakpoint_px,
            log_level,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn error_alert_ttl(&self) -> Duration {
        Duration::from_secs(self.error_alert_ttl_secs)
    }

    pub fn announce_clear_delay(&self) -> Duration {
        Duration::from_millis(self.announce_clear_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: None,
            request_timeout_ms: 10_000,
            max_retries: 2,
            retry_backoff_ms: 250,
            simulated_latency_ms: 1500,
            error_alert_ttl_secs: 10,
            announce_clear_ms: 1000,
            mobile_breakpoint_px: 768,
            log_level: "info".to_string(),
        }
    }
}
