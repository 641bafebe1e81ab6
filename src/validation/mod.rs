//! Contact form validation.
//!
//! Validation is pure: it reads a [`RawSubmission`] and reports every violated
//! rule at once. The same per-field rule backs both the full-form check and
//! the real-time check that runs when a field loses focus.

use crate::domain::{EmailAddress, FormField, PhoneNumber, ValidationError};
use crate::models::{ContactSubmission, RawSubmission};

/// Minimum trimmed length of the name.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum trimmed length of the message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Outcome of validating a whole submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// True iff no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violated rules, in validation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// User-facing messages, in validation order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Check a single field's value against the rule for that field.
///
/// Returns at most one error: presence is checked before format or length.
pub fn validate_field(field: FormField, value: Option<&str>) -> Option<ValidationError> {
    let value = value.map(str::trim).unwrap_or_default();

    match field {
        FormField::Name => {
            if value.is_empty() {
                Some(ValidationError::NameRequired)
            } else if value.chars().count() < MIN_NAME_CHARS {
                Some(ValidationError::NameTooShort)
            } else {
                None
            }
        }
        FormField::Email => {
            if value.is_empty() {
                Some(ValidationError::EmailRequired)
            } else if !EmailAddress::is_valid(value) {
                Some(ValidationError::InvalidEmail)
            } else {
                None
            }
        }
        FormField::Message => {
            if value.is_empty() {
                Some(ValidationError::MessageRequired)
            } else if value.chars().count() < MIN_MESSAGE_CHARS {
                Some(ValidationError::MessageTooShort)
            } else {
                None
            }
        }
        FormField::Phone => {
            if !value.is_empty() && !PhoneNumber::is_valid(value) {
                Some(ValidationError::InvalidPhone)
            } else {
                None
            }
        }
    }
}

/// Validate a whole submission.
///
/// Every field is checked; nothing short-circuits. Errors come out in the
/// order name, email, message, phone.
pub fn validate(raw: &RawSubmission) -> ValidationResult {
    let errors = FormField::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, raw.get(field)))
        .collect();

    ValidationResult { errors }
}

/// Validate and convert into the typed submission.
///
/// # Errors
///
/// Returns the full [`ValidationResult`] when any rule is violated.
pub fn parse(raw: &RawSubmission) -> Result<ContactSubmission, ValidationResult> {
    let result = validate(raw);
    if !result.is_valid() {
        return Err(result);
    }

    let text = |field: FormField| raw.get(field).map(str::trim).unwrap_or_default();

    let email = EmailAddress::new(text(FormField::Email)).map_err(single)?;
    let phone = match text(FormField::Phone) {
        "" => None,
        phone => Some(PhoneNumber::new(phone).map_err(single)?),
    };

    Ok(ContactSubmission {
        name: text(FormField::Name).to_string(),
        email,
        message: text(FormField::Message).to_string(),
        phone,
    })
}

fn single(error: ValidationError) -> ValidationResult {
    ValidationResult {
        errors: vec![error],
    }
}
