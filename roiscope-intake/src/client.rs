//! The webhook client.
//!
//! One validated POST, one parsed acknowledgment, one `Result`. The
//! client never retries: whether a failed submission is retried, backed
//! off, or surfaced to the prospect is the caller's policy.

use crate::error::{IntakeError, IntakeResult};
use crate::request::{LeadRequest, WebhookAck};
use crate::validator::{validate_lead, Severity};

pub struct WebhookClient {
    endpoint: String,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate and submit a lead. Exactly one network attempt.
    ///
    /// Failure taxonomy, in check order:
    /// - `Rejected` — validation failed; nothing was transmitted
    /// - `Http` — the request never completed
    /// - `NonSuccessStatus` — the webhook answered outside 2xx
    /// - `MalformedAck` — the body was not `{success: bool}`
    /// - `Declined` — a well-formed ack with `success == false`
    pub async fn submit(&self, lead: &LeadRequest) -> IntakeResult<WebhookAck> {
        let validation = validate_lead(lead);
        if !validation.valid {
            return Err(IntakeError::Rejected {
                violations: validation.violations,
            });
        }
        for violation in &validation.violations {
            if violation.severity == Severity::Warn {
                log::warn!("lead warning [{}]: {}", violation.rule, violation.detail);
            }
        }

        log::debug!("submitting lead from page {}", lead.source_page);

        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntakeError::NonSuccessStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let ack: WebhookAck = serde_json::from_str(&body)
            .map_err(|e| IntakeError::MalformedAck(e.to_string()))?;

        if !ack.success {
            return Err(IntakeError::Declined);
        }

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_lead_is_rejected_before_any_network_traffic() {
        // Unroutable endpoint: if validation didn't short-circuit, this
        // test would fail with an Http error instead of Rejected.
        let client = WebhookClient::new("http://192.0.2.1:1/webhook");
        let lead = LeadRequest {
            name: String::new(),
            company: String::new(),
            email: "not-an-email".into(),
            help_type: "roi-report".into(),
            message: "one line".into(),
            source: "roi-estimator".into(),
            source_page: "/roi-calculator".into(),
        };

        let err = client.submit(&lead).await.unwrap_err();
        match err {
            IntakeError::Rejected { violations } => {
                assert!(violations.len() >= 3);
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }
}
