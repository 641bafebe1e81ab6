//! Form workflows.
//!
//! Workflows sit between the pure validation rules and the rendering seam:
//! they decide what happens on submit, blur and input, and tell the view,
//! notifier and announcer what to show.

mod contact_form;

pub use contact_form::{
    ContactFormWorkflow, SubmitOutcome, SubmitSettings, FAILURE_ANNOUNCEMENT,
    GENERIC_FAILURE_MESSAGE, SUCCESS_ANNOUNCEMENT,
};
