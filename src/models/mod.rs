//! Data models for the contact form.

pub mod submission;

pub use submission::{ContactSubmission, RawSubmission, SubmissionPayload};
