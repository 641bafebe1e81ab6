//! Domain value objects and types.
//!
//! This module contains the form field schema, the validation errors for
//! each rule, and type-safe wrappers for email addresses and phone numbers.
//! The value objects validate at construction time so an invalid address or
//! number can never reach a transport.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::FormField;
pub use phone::PhoneNumber;
