//! The lead wire format.
//!
//! `LeadRequest` serializes to exactly the seven camelCase keys the CRM
//! webhook expects: `{name, company, email, helpType, message, source,
//! sourcePage}`. The `message` field carries the engine's rendered
//! report — a newline-delimited snapshot of the estimate the prospect
//! was looking at when they submitted.

use serde::{Deserialize, Serialize};

use roiscope_engine::{render_report, Estimate, EstimateInputs};

/// Fixed `source` slug identifying this product in the CRM.
pub const SOURCE_SLUG: &str = "roi-estimator";

/// Default `helpType` when the form doesn't ask.
pub const DEFAULT_HELP_TYPE: &str = "roi-report";

/// Contact details collected by the lead form.
#[derive(Debug, Clone)]
pub struct LeadContact {
    pub name: String,
    pub email: String,
    /// Optional on the form; an empty company is a warning, not an error.
    pub company: Option<String>,
    /// What the prospect wants; defaults to the report request.
    pub help_type: Option<String>,
}

/// The webhook request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub help_type: String,
    pub message: String,
    pub source: String,
    pub source_page: String,
}

impl LeadRequest {
    /// Build a lead from contact details and the estimate snapshot.
    pub fn from_estimate(
        contact: LeadContact,
        inputs: &EstimateInputs,
        estimate: &Estimate,
        source_page: impl Into<String>,
    ) -> Self {
        Self {
            name: contact.name,
            company: contact.company.unwrap_or_default(),
            email: contact.email,
            help_type: contact
                .help_type
                .unwrap_or_else(|| DEFAULT_HELP_TYPE.to_string()),
            message: render_report(inputs, estimate),
            source: SOURCE_SLUG.to_string(),
            source_page: source_page.into(),
        }
    }
}

/// The only acknowledgment shape the webhook may return.
///
/// `success` must be present and must be a boolean; anything else is
/// treated as a failed submission. Extra fields are tolerated.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookAck {
    pub success: bool,
}
