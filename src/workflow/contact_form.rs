//! Contact form submission workflow.
//!
//! Business logic for the contact form: validation on submit and on blur,
//! delivery with a per-attempt timeout and retries, and the feedback shown
//! for each outcome.

use crate::config::Config;
use crate::domain::FormField;
use crate::error::{SubmissionError, SubmissionResult};
use crate::models::ContactSubmission;
use crate::observability::{FormMetrics, Timer};
use crate::transport::{self, RetryPolicy, Transport};
use crate::ui::{Announcer, FormView, Notifier, SubmitControl};
use crate::validation::{self, ValidationResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// The only message a visitor sees when delivery fails.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact us directly.";

/// Announced after a successful delivery.
pub const SUCCESS_ANNOUNCEMENT: &str = "Message sent successfully";

/// Announced after a failed delivery.
pub const FAILURE_ANNOUNCEMENT: &str = "Error sending message. Please try again.";

/// How a submit event ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered; the form was cleared and the success panel shown.
    Sent,
    /// Delivery failed; the fields were left as they were.
    Failed,
    /// Validation failed; nothing was sent.
    Rejected(ValidationResult),
    /// Another submission from this form is still in flight.
    Busy,
}

/// Timing and retry settings for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitSettings {
    /// Upper bound on a single attempt.
    pub attempt_timeout: Duration,
    pub retry: RetryPolicy,
}

impl SubmitSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            attempt_timeout: config.request_timeout(),
            retry: RetryPolicy::from_config(config),
        }
    }
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Drives one contact form.
///
/// Each instance owns its own in-flight flag, so independent forms on the
/// same page do not block each other.
pub struct ContactFormWorkflow {
    view: Arc<dyn FormView>,
    notifier: Arc<dyn Notifier>,
    announcer: Arc<dyn Announcer>,
    transport: Arc<dyn Transport>,
    settings: SubmitSettings,
    metrics: FormMetrics,
    in_flight: AtomicBool,
}

/// Restores the submit control and clears the in-flight flag when dropped,
/// whether the submission settled or its future was dropped.
struct PendingGuard<'a> {
    view: &'a dyn FormView,
    in_flight: &'a AtomicBool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.view.set_submit_control(SubmitControl::Ready);
        self.in_flight.store(false, Ordering::Release);
    }
}

impl ContactFormWorkflow {
    pub fn new(
        view: Arc<dyn FormView>,
        notifier: Arc<dyn Notifier>,
        announcer: Arc<dyn Announcer>,
        transport: Arc<dyn Transport>,
        settings: SubmitSettings,
    ) -> Self {
        Self {
            view,
            notifier,
            announcer,
            transport,
            settings,
            metrics: FormMetrics::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Build a workflow whose transport and delivery settings come from `config`.
    pub fn from_config(
        config: &Config,
        view: Arc<dyn FormView>,
        notifier: Arc<dyn Notifier>,
        announcer: Arc<dyn Announcer>,
    ) -> Self {
        Self::new(
            view,
            notifier,
            announcer,
            transport::from_config(config),
            SubmitSettings::from_config(config),
        )
    }

    /// Share an existing metrics tracker instead of a private one.
    pub fn with_metrics(mut self, metrics: FormMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &FormMetrics {
        &self.metrics
    }

    pub fn settings(&self) -> &SubmitSettings {
        &self.settings
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle the form's submit event.
    ///
    /// Clears earlier errors, validates what the view holds, and either shows
    /// every violated rule in one alert or submits.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::warn!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        self.metrics.track_submission();
        self.notifier.clear_errors();
        self.view.clear_all_field_errors();

        let raw = self.view.read_submission();
        match validation::parse(&raw) {
            Ok(submission) => self.submit(&submission).await,
            Err(result) => {
                self.metrics.track_validation_rejection(result.errors().len());
                self.notifier.show_errors(&result.messages());
                SubmitOutcome::Rejected(result)
            }
        }
    }

    /// Submit an already validated submission and report the outcome.
    ///
    /// The submit control is pending for the whole operation and restored
    /// however it ends.
    pub async fn submit(&self, submission: &ContactSubmission) -> SubmitOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        let _guard = PendingGuard {
            view: self.view.as_ref(),
            in_flight: &self.in_flight,
        };
        self.view.set_submit_control(SubmitControl::Pending);

        match self.deliver(submission).await {
            Ok(()) => {
                self.view.reset_fields();
                self.notifier.show_success();
                self.announcer.announce(SUCCESS_ANNOUNCEMENT);
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "Form submission error");
                self.notifier
                    .show_errors(&[GENERIC_FAILURE_MESSAGE.to_string()]);
                self.announcer.announce(FAILURE_ANNOUNCEMENT);
                SubmitOutcome::Failed
            }
        }
    }

    /// Deliver through the transport with a timeout per attempt, retrying
    /// transient failures under the retry policy.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt.
    pub async fn deliver(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        let payload = submission.to_payload(chrono::Utc::now());
        let timer = Timer::new("deliver_submission");
        let mut retries = 0;

        let result = loop {
            let attempt = tokio::time::timeout(
                self.settings.attempt_timeout,
                self.transport.send(&payload),
            )
            .await;

            let error = match attempt {
                Ok(Ok(())) => break Ok(()),
                Ok(Err(e)) => SubmissionError::Transport(e),
                Err(_) => {
                    self.metrics.track_timeout();
                    SubmissionError::Timeout(self.settings.attempt_timeout)
                }
            };

            if !self.settings.retry.should_retry(retries, error.is_transient()) {
                break Err(error);
            }

            retries += 1;
            let backoff = self.settings.retry.backoff(retries);
            tracing::warn!(
                error = %error,
                retry = retries,
                backoff_ms = backoff.as_millis() as u64,
                "Delivery failed, retrying"
            );
            self.metrics.track_retry();
            tokio::time::sleep(backoff).await;
        };

        let duration_ms = timer.finish_with_status(result.is_ok());
        self.metrics.track_delivery(duration_ms, result.is_ok());
        result
    }

    /// A field lost focus: check it alone and attach its error, if any.
    pub fn on_field_blur(&self, field: FormField) {
        self.view.clear_field_error(field);

        let value = self.view.field_value(field);
        if let Some(error) = validation::validate_field(field, value.as_deref()) {
            self.view.show_field_error(field, error.message());
        }
    }

    /// A field was edited: drop its error without re-validating.
    pub fn on_field_input(&self, field: FormField) {
        self.view.clear_field_error(field);
    }

    /// "Send Another Message": return from the success panel to an empty form.
    pub fn reset_form(&self) {
        self.notifier.hide_success();
        self.view.reset_fields();
        self.notifier.clear_errors();
        self.view.clear_all_field_errors();
        self.view.focus_field(FormField::ALL[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::SimulatedTransport;
    use crate::ui::{HeadlessForm, HeadlessNotifier, LiveRegion};

    fn workflow(form: Arc<HeadlessForm>) -> ContactFormWorkflow {
        ContactFormWorkflow::new(
            form,
            Arc::new(HeadlessNotifier::new(Duration::from_secs(10))),
            Arc::new(LiveRegion::new(Duration::from_secs(1))),
            Arc::new(SimulatedTransport::new(Duration::from_millis(1500))),
            SubmitSettings::default(),
        )
    }

    #[test]
    fn test_blur_attaches_field_error() {
        let form = Arc::new(HeadlessForm::new());
        let workflow = workflow(form.clone());

        form.set_value(FormField::Email, "bad");
        workflow.on_field_blur(FormField::Email);

        let error = form.field_error(FormField::Email).unwrap();
        assert_eq!(error.message, "Please enter a valid email address");
        assert!(form.field_error(FormField::Name).is_none());
    }

    #[test]
    fn test_blur_on_valid_field_leaves_no_error() {
        let form = Arc::new(HeadlessForm::new());
        let workflow = workflow(form.clone());

        form.set_value(FormField::Name, "J");
        workflow.on_field_blur(FormField::Name);
        assert!(form.field_error(FormField::Name).is_some());

        form.set_value(FormField::Name, "Jo");
        workflow.on_field_blur(FormField::Name);
        assert!(form.field_error(FormField::Name).is_none());
    }

    #[test]
    fn test_input_clears_without_revalidating() {
        let form = Arc::new(HeadlessForm::new());
        let workflow = workflow(form.clone());

        workflow.on_field_blur(FormField::Message);
        assert!(form.field_error(FormField::Message).is_some());

        // Still too short, but the error only comes back on the next blur.
        form.set_value(FormField::Message, "hi");
        workflow.on_field_input(FormField::Message);
        assert!(form.field_error(FormField::Message).is_none());
    }

    #[test]
    fn test_blank_phone_blur_is_fine() {
        let form = Arc::new(HeadlessForm::new());
        let workflow = workflow(form.clone());

        workflow.on_field_blur(FormField::Phone);
        assert!(form.field_error(FormField::Phone).is_none());
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            request_timeout_ms: 2500,
            max_retries: 1,
            ..Config::default()
        };
        let settings = SubmitSettings::from_config(&config);
        assert_eq!(settings.attempt_timeout, Duration::from_millis(2500));
        assert_eq!(settings.retry.max_retries, 1);
    }
}
