//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// A phone number as the visitor typed it, trimmed.
///
/// The number is validated after separators (whitespace, hyphens,
/// parentheses and periods) are stripped. The value the user typed is kept
/// for display; [`PhoneNumber::normalized`] gives the stripped form.
///
/// # Example
///
/// ```
/// use site_ui_core::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.normalized(), "+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Trim and check `value`: after separators are stripped it must be an
    /// optional `+`, a non-zero digit, then at most 15 more digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the number does not match.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match value.trim() {
            trimmed if Self::is_valid(trimmed) => Ok(Self(trimmed.to_owned())),
            _ => Err(ValidationError::InvalidPhone),
        }
    }

    /// Check a phone number against the grammar.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_RE.is_match(&strip_separators(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The number with separators removed.
    pub fn normalized(&self) -> String {
        strip_separators(&self.0)
    }

    /// ASCII digits only, without the `+`.
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

fn strip_separators(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '.')))
        .collect()
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
