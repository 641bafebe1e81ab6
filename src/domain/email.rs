//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local part of common special characters, then a domain of at least two
/// labels. Labels are letters, digits and inner hyphens, at most 63 long.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// A trimmed address that matched the grammar.
///
/// # Example
///
/// ```
/// use site_ui_core::domain::EmailAddress;
///
/// let email = EmailAddress::new(" user@example.com ").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim and check `value`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` when the trimmed value does not
    /// match the address grammar.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match value.trim() {
            trimmed if Self::is_valid(trimmed) => Ok(Self(trimmed.to_owned())),
            _ => Err(ValidationError::InvalidEmail),
        }
    }

    /// Check an already-trimmed string against the address grammar.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Everything before the last `@`.
    pub fn local_part(&self) -> &str {
        // The grammar has no '@' in the domain, so the last one splits.
        self.0.rsplit_once('@').map_or("", |(local, _)| local)
    }

    /// Everything after the last `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_trimmed() {
        let email = EmailAddress::new("  jo@x.co\n").unwrap();
        assert_eq!(email.as_str(), "jo@x.co");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("foo.com").is_err());
        assert!(EmailAddress::new("@x.com").is_err());
        assert!(EmailAddress::new("a@b").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@-example.com").is_err());
        assert!(EmailAddress::new("user@example-.com").is_err());
        assert!(EmailAddress::new("user@exa_mple.com").is_err());
        assert!(EmailAddress::new("a@b.co").is_ok());
        assert!(EmailAddress::new("first.last@sub.domain.org").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
        assert!(EmailAddress::new("o'brien{x}@my-host.io").is_ok());
    }

    #[test]
    fn test_email_is_case_insensitive() {
        assert!(EmailAddress::new("John.Doe@Example.COM").is_ok());
    }

    #[test]
    fn test_email_label_length() {
        let label = "a".repeat(63);
        assert!(EmailAddress::new(format!("x@{}.com", label)).is_ok());
        let label = "a".repeat(64);
        assert!(EmailAddress::new(format!("x@{}.com", label)).is_err());
    }

    #[test]
    fn test_email_parts() {
        let email = EmailAddress::new("first.last@mail.example.org").unwrap();
        assert_eq!(email.local_part(), "first.last");
        assert_eq!(email.domain(), "mail.example.org");
    }

    #[test]
    fn test_email_serde_as_plain_string() {
        let email: EmailAddress = serde_json::from_str("\" jo@x.co \"").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"jo@x.co\"");

        assert!(serde_json::from_str::<EmailAddress>("\"a@b\"").is_err());
    }
}
