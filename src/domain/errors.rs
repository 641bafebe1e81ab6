//! Field validation errors.

use super::field::FormField;
use std::fmt;

/// A single violated form rule.
///
/// The `Display` text is the message shown to the user, so it is kept
/// stable and free of the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The name field is blank.
    NameRequired,

    /// The trimmed name is shorter than two characters.
    NameTooShort,

    /// The email field is blank.
    EmailRequired,

    /// The email does not match the address grammar.
    InvalidEmail,

    /// The message field is blank.
    MessageRequired,

    /// The trimmed message is shorter than ten characters.
    MessageTooShort,

    /// The phone number does not match the phone grammar.
    InvalidPhone,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> FormField {
        match self {
            Self::NameRequired | Self::NameTooShort => FormField::Name,
            Self::EmailRequired | Self::InvalidEmail => FormField::Email,
            Self::MessageRequired | Self::MessageTooShort => FormField::Message,
            Self::InvalidPhone => FormField::Phone,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required",
            Self::NameTooShort => "Name must be at least 2 characters long",
            Self::EmailRequired => "Email is required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::MessageRequired => "Message is required",
            Self::MessageTooShort => "Message must be at least 10 characters long",
            Self::InvalidPhone => "Please enter a valid phone number",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
