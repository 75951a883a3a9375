//! Intake error types.
//!
//! Every failure mode has a named variant. No stringly-typed errors.

use thiserror::Error;

use crate::validator::Violation;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Lead failed validation with {} violation(s)", .violations.len())]
    Rejected { violations: Vec<Violation> },

    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook returned HTTP status {0}")]
    NonSuccessStatus(u16),

    #[error("Webhook acknowledgment was malformed: {0}")]
    MalformedAck(String),

    #[error("Webhook declined the submission")]
    Declined,

    #[error("A submission is already in flight")]
    AlreadyPending,
}

/// Result type alias for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;
