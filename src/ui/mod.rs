//! The rendering seam.
//!
//! The form workflow never touches a page directly. It talks to three small
//! traits: [`FormView`] for field values and per-field error state,
//! [`Notifier`] for form-level messages, and [`Announcer`] for the live
//! region. A browser binding implements them over the DOM; the headless
//! implementations in this module keep the same state in memory.

pub mod alert;
pub mod headless;
pub mod live_region;

pub use alert::{Alert, AlertBoard, AlertId};
pub use headless::{FieldErrorState, HeadlessForm, HeadlessNotifier, SubmitButtonState};
pub use live_region::LiveRegion;

use crate::domain::FormField;
use crate::models::RawSubmission;

/// Label shown on the submit control while a submission is in flight.
pub const PENDING_LABEL: &str = "Sending...";

/// State of the control that triggers a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    /// Enabled, showing its original label.
    Ready,
    /// Disabled and busy, showing [`PENDING_LABEL`].
    Pending,
}

/// Read and write access to the contact form's fields.
pub trait FormView: Send + Sync {
    /// Current value of every field, as entered.
    fn read_submission(&self) -> RawSubmission;

    /// Current value of a single field.
    fn field_value(&self, field: FormField) -> Option<String>;

    /// Mark the field as invalid and attach `message` beneath it.
    fn show_field_error(&self, field: FormField, message: &str);

    /// Remove the field's error state and message, if any.
    fn clear_field_error(&self, field: FormField);

    /// Empty every field.
    fn reset_fields(&self);

    fn set_submit_control(&self, state: SubmitControl);

    fn focus_field(&self, field: FormField);

    fn clear_all_field_errors(&self) {
        for field in FormField::ALL {
            self.clear_field_error(field);
        }
    }
}

/// Form-level feedback.
pub trait Notifier: Send + Sync {
    /// Show `messages` together in one dismissible alert at the top of the form.
    fn show_errors(&self, messages: &[String]);

    /// Remove every form-level error alert.
    fn clear_errors(&self);

    /// Show the persistent success acknowledgement.
    fn show_success(&self);

    fn hide_success(&self);
}

/// Announces text to assistive technology without moving focus.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}
