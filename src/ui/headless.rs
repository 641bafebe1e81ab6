//! In-memory form and notifier.
//!
//! These keep the state a page would show (field values, inline errors, the
//! submit button, alerts and the success panel) so the workflow can run and
//! be inspected without a DOM.

use super::alert::{Alert, AlertBoard};
use super::{FormView, Notifier, SubmitControl, PENDING_LABEL};
use crate::domain::FormField;
use crate::models::RawSubmission;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Default label of the submit button.
pub const SUBMIT_LABEL: &str = "Send Message";

/// Label of the button offered with the success acknowledgement.
pub const SEND_ANOTHER_LABEL: &str = "Send Another Message";

/// Inline error attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorState {
    pub message: String,
    /// Value of the field's `aria-describedby`.
    pub described_by: String,
}

/// Rendered state of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: String,
    pub disabled: bool,
    pub aria_busy: bool,
}

#[derive(Debug)]
struct FormState {
    values: HashMap<FormField, String>,
    errors: HashMap<FormField, FieldErrorState>,
    submit: SubmitButtonState,
    original_label: String,
    focused: Option<FormField>,
}

/// A contact form held in memory.
#[derive(Debug)]
pub struct HeadlessForm {
    state: Mutex<FormState>,
}

impl HeadlessForm {
    pub fn new() -> Self {
        Self::with_submit_label(SUBMIT_LABEL)
    }

    pub fn with_submit_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            state: Mutex::new(FormState {
                values: HashMap::new(),
                errors: HashMap::new(),
                submit: SubmitButtonState {
                    label: label.clone(),
                    disabled: false,
                    aria_busy: false,
                },
                original_label: label,
                focused: None,
            }),
        }
    }

    /// Type a value into a field, replacing what was there.
    pub fn set_value(&self, field: FormField, value: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.values.insert(field, value.into());
        }
    }

    /// Fill several fields at once.
    pub fn fill(&self, raw: &RawSubmission) {
        for field in FormField::ALL {
            if let Some(value) = raw.get(field) {
                self.set_value(field, value);
            }
        }
    }

    pub fn field_error(&self, field: FormField) -> Option<FieldErrorState> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.errors.get(&field).cloned())
    }

    pub fn has_field_errors(&self) -> bool {
        self.state
            .lock()
            .map(|state| !state.errors.is_empty())
            .unwrap_or(false)
    }

    pub fn submit_button(&self) -> Option<SubmitButtonState> {
        self.state.lock().ok().map(|state| state.submit.clone())
    }

    pub fn focused(&self) -> Option<FormField> {
        self.state.lock().ok().and_then(|state| state.focused)
    }
}

impl Default for HeadlessForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for HeadlessForm {
    fn read_submission(&self) -> RawSubmission {
        let Ok(state) = self.state.lock() else {
            return RawSubmission::default();
        };

        let mut raw = RawSubmission::default();
        for (field, value) in &state.values {
            raw.set(*field, value.clone());
        }
        raw
    }

    fn field_value(&self, field: FormField) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.values.get(&field).cloned())
    }

    fn show_field_error(&self, field: FormField, message: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.errors.insert(
                field,
                FieldErrorState {
                    message: message.to_string(),
                    described_by: field.error_element_id(),
                },
            );
        }
    }

    fn clear_field_error(&self, field: FormField) {
        if let Ok(mut state) = self.state.lock() {
            state.errors.remove(&field);
        }
    }

    fn reset_fields(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.values.clear();
        }
    }

    fn set_submit_control(&self, control: SubmitControl) {
        if let Ok(mut state) = self.state.lock() {
            state.submit = match control {
                SubmitControl::Ready => SubmitButtonState {
                    label: state.original_label.clone(),
                    disabled: false,
                    aria_busy: false,
                },
                SubmitControl::Pending => SubmitButtonState {
                    label: PENDING_LABEL.to_string(),
                    disabled: true,
                    aria_busy: true,
                },
            };
        }
    }

    fn focus_field(&self, field: FormField) {
        if let Ok(mut state) = self.state.lock() {
            state.focused = Some(field);
        }
    }
}

#[derive(Debug, Default)]
struct SuccessPanel {
    visible: bool,
    send_another_offered: bool,
}

/// Form-level messages held in memory.
///
/// Error alerts expire after the board's TTL. The success panel stays until
/// it is hidden.
#[derive(Debug)]
pub struct HeadlessNotifier {
    alerts: AlertBoard,
    success: Mutex<SuccessPanel>,
}

impl HeadlessNotifier {
    pub fn new(alert_ttl: Duration) -> Self {
        Self {
            alerts: AlertBoard::new(alert_ttl),
            success: Mutex::new(SuccessPanel::default()),
        }
    }

    /// Alerts currently visible, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.active()
    }

    pub fn alert_board(&self) -> &AlertBoard {
        &self.alerts
    }

    pub fn success_visible(&self) -> bool {
        self.success
            .lock()
            .map(|panel| panel.visible)
            .unwrap_or(false)
    }

    /// Whether the "Send Another Message" button has been offered.
    pub fn send_another_offered(&self) -> bool {
        self.success
            .lock()
            .map(|panel| panel.send_another_offered)
            .unwrap_or(false)
    }
}

impl Notifier for HeadlessNotifier {
    fn show_errors(&self, messages: &[String]) {
        self.alerts.push(messages);
    }

    fn clear_errors(&self) {
        self.alerts.clear();
    }

    fn show_success(&self) {
        if let Ok(mut panel) = self.success.lock() {
            panel.visible = true;
            panel.send_another_offered = true;
        }
    }

    fn hide_success(&self) {
        if let Ok(mut panel) = self.success.lock() {
            panel.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_control_restores_original_label() {
        let form = HeadlessForm::with_submit_label("Book a Call");

        form.set_submit_control(SubmitControl::Pending);
        let button = form.submit_button().unwrap();
        assert_eq!(button.label, "Sending...");
        assert!(button.disabled);
        assert!(button.aria_busy);

        form.set_submit_control(SubmitControl::Ready);
        let button = form.submit_button().unwrap();
        assert_eq!(button.label, "Book a Call");
        assert!(!button.disabled);
        assert!(!button.aria_busy);
    }

    #[test]
    fn test_field_error_sets_described_by() {
        let form = HeadlessForm::new();
        form.show_field_error(FormField::Email, "Please enter a valid email address");

        let error = form.field_error(FormField::Email).unwrap();
        assert_eq!(error.described_by, "email-error");

        form.clear_all_field_errors();
        assert!(!form.has_field_errors());
    }

    #[test]
    fn test_read_submission_and_reset() {
        let form = HeadlessForm::new();
        form.set_value(FormField::Name, "Jo");
        form.set_value(FormField::Phone, "555 1234");

        let raw = form.read_submission();
        assert_eq!(raw.name.as_deref(), Some("Jo"));
        assert_eq!(raw.phone.as_deref(), Some("555 1234"));
        assert_eq!(raw.email, None);

        form.reset_fields();
        assert_eq!(form.read_submission(), RawSubmission::default());
    }

    #[test]
    fn test_success_panel() {
        let notifier = HeadlessNotifier::new(Duration::from_secs(10));
        assert!(!notifier.success_visible());

        notifier.show_success();
        assert!(notifier.success_visible());
        assert!(notifier.send_another_offered());

        notifier.hide_success();
        assert!(!notifier.success_visible());
    }
}
