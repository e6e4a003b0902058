//! View-owned form state.
//!
//! The controller never stores the email field or the pending flags itself.
//! The page owns them (as reactive signals) and hands the controller a
//! [`FormState`] to read and write through.

use crate::model::SubmissionStatus;

/// Email field plus one status per action.
///
/// Lead and order statuses are independent; a pending lead never blocks an
/// order and vice versa.
pub trait FormState {
    /// Current content of the email field.
    fn email(&self) -> String;
    /// Replace the email field.
    fn set_email(&self, email: String);

    /// Status of the checklist form.
    fn lead_status(&self) -> SubmissionStatus;
    /// Move the checklist form to `status`.
    fn set_lead_status(&self, status: SubmissionStatus);

    /// Status of the pricing buttons.
    fn order_status(&self) -> SubmissionStatus;
    /// Move the pricing buttons to `status`.
    fn set_order_status(&self, status: SubmissionStatus);
}
