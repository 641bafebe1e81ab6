//! Contact form field schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the contact form, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
    Phone,
}

impl FormField {
    /// All fields in validation order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Phone,
    ];

    /// The form control name (`name="..."`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Phone => "phone",
        }
    }

    /// Look up a field by its control name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Whether the field must be filled in. Only the phone number is optional.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Id of the element carrying this field's inline error, used for
    /// `aria-describedby`.
    pub fn error_element_id(&self) -> String {
        format!("{}-error", self.name())
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("subject"), None);
    }

    #[test]
    fn test_only_phone_is_optional() {
        assert!(FormField::Name.is_required());
        assert!(FormField::Email.is_required());
        assert!(FormField::Message.is_required());
        assert!(!FormField::Phone.is_required());
    }

    #[test]
    fn test_error_element_id() {
        assert_eq!(FormField::Email.error_element_id(), "email-error");
    }
}
