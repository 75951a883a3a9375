//! Lead validation — the pre-transmission constraint layer.
//!
//! The webhook is an external system we don't control; what we do
//! control is what leaves this process. Every lead passes this rule
//! set before the client will touch the network. A `Reject` violation
//! blocks transmission; a `Warn` violation is logged and the lead
//! proceeds.

use serde::Serialize;

use crate::request::LeadRequest;

/// Longest accepted name or company.
const MAX_NAME_LEN: usize = 200;
/// Longest accepted report message.
const MAX_MESSAGE_LEN: usize = 10_000;

/// One validation rule failure.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub rule: &'static str,
    pub detail: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Severity {
    /// Lead must not be transmitted.
    Reject,
    /// Lead can proceed but the violation is logged.
    Warn,
}

/// Validation result.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Minimal email shape check: a non-empty user part, one `@`, and a
/// dotted domain with something on both sides of the final dot. This is
/// deliverability triage, not RFC 5321.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((user, domain)) = email.split_once('@') else {
        return false;
    };
    if user.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a lead before it reaches the webhook.
pub fn validate_lead(lead: &LeadRequest) -> ValidationResult {
    let mut violations = Vec::new();

    // ================================================================
    // RULE 1: Required fields must be non-empty
    // ================================================================
    for (field, value) in [
        ("name", &lead.name),
        ("email", &lead.email),
        ("message", &lead.message),
        ("source", &lead.source),
        ("sourcePage", &lead.source_page),
    ] {
        if value.trim().is_empty() {
            violations.push(Violation {
                rule: "REQUIRED_FIELD_EMPTY",
                detail: format!("Field '{}' is empty.", field),
                severity: Severity::Reject,
            });
        }
    }

    // ================================================================
    // RULE 2: Email must look deliverable
    // ================================================================
    if !lead.email.trim().is_empty() && !email_shape_ok(lead.email.trim()) {
        violations.push(Violation {
            rule: "EMAIL_SHAPE",
            detail: format!("'{}' is not a plausible email address.", lead.email),
            severity: Severity::Reject,
        });
    }

    // ================================================================
    // RULE 3: The message must be the rendered report
    //         (a single-line message means the report was never attached)
    // ================================================================
    if !lead.message.trim().is_empty() && lead.message.trim().lines().count() < 2 {
        violations.push(Violation {
            rule: "MESSAGE_NOT_REPORT",
            detail: "Message is a single line; the estimate report was not attached.".into(),
            severity: Severity::Reject,
        });
    }

    // ================================================================
    // RULE 4: Field length caps
    // ================================================================
    if lead.name.len() > MAX_NAME_LEN {
        violations.push(Violation {
            rule: "NAME_TOO_LONG",
            detail: format!("Name exceeds {} bytes.", MAX_NAME_LEN),
            severity: Severity::Reject,
        });
    }
    if lead.company.len() > MAX_NAME_LEN {
        violations.push(Violation {
            rule: "COMPANY_TOO_LONG",
            detail: format!("Company exceeds {} bytes.", MAX_NAME_LEN),
            severity: Severity::Reject,
        });
    }
    if lead.message.len() > MAX_MESSAGE_LEN {
        violations.push(Violation {
            rule: "MESSAGE_TOO_LONG",
            detail: format!("Message exceeds {} bytes.", MAX_MESSAGE_LEN),
            severity: Severity::Reject,
        });
    }

    // ================================================================
    // RULE 5: Missing company is worth knowing, not worth blocking
    // ================================================================
    if lead.company.trim().is_empty() {
        violations.push(Violation {
            rule: "COMPANY_MISSING",
            detail: "No company name provided.".into(),
            severity: Severity::Warn,
        });
    }

    let valid = !violations.iter().any(|v| v.severity == Severity::Reject);

    ValidationResult { valid, violations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadRequest {
        LeadRequest {
            name: "Dana Ortiz".into(),
            company: "Ortiz Distribution".into(),
            email: "dana@example.com".into(),
            help_type: "roi-report".into(),
            message: "ROI Estimate\n\nDaily orders: 50\nTotal annual savings: $219,358".into(),
            source: "roi-estimator".into(),
            source_page: "/roi-calculator".into(),
        }
    }

    #[test]
    fn valid_lead_passes() {
        let result = validate_lead(&valid_lead());
        assert!(result.valid, "violations: {:?}", result.violations);
    }

    #[test]
    fn empty_name_rejected() {
        let mut lead = valid_lead();
        lead.name = "   ".into();
        let result = validate_lead(&lead);
        assert!(!result.valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.rule == "REQUIRED_FIELD_EMPTY"));
    }

    #[test]
    fn bad_email_shapes_rejected() {
        for email in ["dana", "dana@", "@example.com", "dana@example", "dana @example.com", "dana@example."] {
            let mut lead = valid_lead();
            lead.email = email.into();
            let result = validate_lead(&lead);
            assert!(!result.valid, "'{}' should be rejected", email);
            assert!(
                result.violations.iter().any(|v| v.rule == "EMAIL_SHAPE"),
                "'{}' missing EMAIL_SHAPE violation: {:?}",
                email,
                result.violations
            );
        }
    }

    #[test]
    fn plausible_emails_pass() {
        for email in ["dana@example.com", "d.ortiz+roi@ops.example.co"] {
            let mut lead = valid_lead();
            lead.email = email.into();
            let result = validate_lead(&lead);
            assert!(result.valid, "'{}' should pass: {:?}", email, result.violations);
        }
    }

    #[test]
    fn single_line_message_rejected() {
        let mut lead = valid_lead();
        lead.message = "Please contact me".into();
        let result = validate_lead(&lead);
        assert!(!result.valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.rule == "MESSAGE_NOT_REPORT"));
    }

    #[test]
    fn oversized_message_rejected() {
        let mut lead = valid_lead();
        lead.message = "line\n".repeat(3_000);
        let result = validate_lead(&lead);
        assert!(!result.valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.rule == "MESSAGE_TOO_LONG"));
    }

    #[test]
    fn missing_company_warns_but_passes() {
        let mut lead = valid_lead();
        lead.company = String::new();
        let result = validate_lead(&lead);
        assert!(result.valid);
        assert!(result
            .violations
            .iter()
            .any(|v| v.rule == "COMPANY_MISSING" && v.severity == Severity::Warn));
    }
}
