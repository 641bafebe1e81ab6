//! Site UI core - interactive behaviour for a marketing website.
//!
//! The heart of the crate is the contact form: pure validation of what a
//! visitor typed, and a workflow that submits valid data through a
//! [`Transport`](transport::Transport) and reports the outcome. Around it sit
//! the typed view state for section navigation and the mobile menu, and the
//! accessibility announcement channel.
//!
//! # Architecture
//!
//! - **domain**: Field schema, validation errors, email and phone value objects
//! - **models**: Raw form data, the validated submission and its payload
//! - **validation**: Whole-form and per-field rules
//! - **workflow**: Submit, blur and input handling for the contact form
//! - **transport**: Simulated and HTTP delivery, retry policy
//! - **ui**: Rendering traits plus headless renderers and the live region
//! - **navigation**: Section and mobile menu state with view effects
//! - **config**: Configuration from environment variables
//! - **error**: Error types for transport, submission, config and navigation
//! - **observability**: Logging setup and form metrics

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod navigation;
pub mod observability;
pub mod transport;
pub mod ui;
pub mod validation;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use domain::{EmailAddress, FormField, PhoneNumber, ValidationError};
pub use error::{ConfigError, NavigationError, SubmissionError, TransportError};
pub use models::{ContactSubmission, RawSubmission, SubmissionPayload};
pub use navigation::{MenuState, SiteState, ViewController, ViewEffect};
pub use observability::FormMetrics;
pub use transport::{HttpTransport, RetryPolicy, SimulatedTransport, Transport};
pub use ui::{Announcer, FormView, LiveRegion, Notifier, SubmitControl};
pub use validation::{parse, validate, validate_field, ValidationResult};
pub use workflow::{ContactFormWorkflow, SubmitOutcome, SubmitSettings};
