//! Contact form submission types.

use crate::domain::{EmailAddress, FormField, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw form data as read from the page.
///
/// Every field may be missing. This is the input to validation; nothing
/// here is trusted until it has been turned into a [`ContactSubmission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub phone: Option<String>,
}

impl RawSubmission {
    /// Build from `(control name, value)` pairs, the shape of browser form data.
    ///
    /// Unknown control names are ignored. A repeated name keeps the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            match FormField::from_name(key.as_ref()) {
                Some(field) => raw.set(field, value),
                None => tracing::debug!(control = key.as_ref(), "Ignoring unknown form control"),
            }
        }
        raw
    }

    /// Get the value for a field.
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Message => self.message.as_deref(),
            FormField::Phone => self.phone.as_deref(),
        }
    }

    /// Set the value for a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
            FormField::Phone => self.phone = value,
        }
    }
}

/// A validated contact submission.
///
/// Only produced by [`crate::validation::parse`]. Text fields are trimmed and
/// a blank phone number is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
    pub phone: Option<PhoneNumber>,
}

impl ContactSubmission {
    /// Build the payload handed to a transport, stamped with `submitted_at`.
    pub fn to_payload(&self, submitted_at: DateTime<Utc>) -> SubmissionPayload {
        SubmissionPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            phone: self.phone.clone(),
            submitted_at: submitted_at.to_rfc3339(),
        }
    }
}

/// JSON body delivered by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    pub submitted_at: String,
}
