//! Lead intake — the typed boundary between the estimator and the CRM.
//!
//! Nothing leaves this process as an ad-hoc JSON blob. A lead is a
//! `LeadRequest` with every field enumerated, it is validated by an
//! explicit rule set before transmission, and the webhook call returns
//! a `Result` the caller owns:
//! - Invalid leads are rejected locally, before any network traffic
//! - The webhook's acknowledgment must be exactly `{success: bool}`;
//!   any other shape is a failure, not a shrug
//! - The client makes exactly one attempt — retry and backoff are the
//!   caller's policy decision, never swallowed here
//! - One submission in flight at a time, enforced by the tracker

pub mod client;
pub mod error;
pub mod request;
pub mod tracker;
pub mod validator;

pub use client::WebhookClient;
pub use error::{IntakeError, IntakeResult};
pub use request::{LeadContact, LeadRequest, WebhookAck};
pub use tracker::{SubmissionStatus, SubmissionTracker};
pub use validator::{validate_lead, Severity, ValidationResult, Violation};
