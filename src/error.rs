//! Error types for the site UI core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field rule violations live in [`crate::domain::ValidationError`].

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while a transport delivers a submission.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never reached the endpoint
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Endpoint returned an error status code
    #[error("Endpoint error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to encode the payload
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The request may have been sent but no response arrived in time
    #[error("Request timeout")]
    Timeout,

    /// Generic transport error with context
    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Whether another attempt might succeed without delivering twice.
    ///
    /// Failures before the request reached the endpoint, 408, 429 and 5xx are
    /// transient. A timeout is not: the endpoint may already have the message.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpError(_) => true,
            Self::ApiError { status, .. } => {
                *status == 408 || *status == 429 || (500..600).contains(status)
            }
            Self::Timeout | Self::JsonError(_) | Self::Other(_) => false,
        }
    }
}

/// Errors that can occur while submitting the contact form.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The transport failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The attempt did not settle within the configured timeout
    #[error("Submission timed out after {0:?}")]
    Timeout(Duration),
}

impl SubmissionError {
    /// Whether another attempt might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_transient(),
            Self::Timeout(_) => false,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while changing the visible section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No section with this id exists on the page
    #[error("Section not found: {0}")]
    UnknownSection(String),
}

/// Convenience type alias for Results with TransportError
pub type TransportResult<T> = Result<T, TransportError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with NavigationError
pub type NavigationResult<T> = Result<T, NavigationError>;
