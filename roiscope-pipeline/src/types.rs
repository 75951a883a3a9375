use serde::Serialize;

use roiscope_engine::{Assumptions, EstimateInputs, SavingsCategory};

/// An estimate request flowing into the digest pipeline.
#[derive(Clone, Debug)]
pub struct EstimateQuery {
    /// Request ID for tracking through logs.
    pub request_id: String,
    /// Prospect company name, when known.
    pub company: Option<String>,
    /// The five business inputs.
    pub inputs: EstimateInputs,
    /// Business assumptions to evaluate against.
    pub assumptions: Assumptions,
}

impl EstimateQuery {
    /// Build a query over default assumptions.
    pub fn new(request_id: impl Into<String>, inputs: EstimateInputs) -> Self {
        Self {
            request_id: request_id.into(),
            company: None,
            inputs,
            assumptions: Assumptions::default(),
        }
    }
}

/// One savings category's dollar contribution, flowing through the
/// pipeline as a candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SavingsLine {
    pub category: SavingsCategory,
    /// Pre-multiplier amount from the category formula.
    pub raw_amount: f64,
    /// Amount after the pain-point multiplier; `None` until scored.
    pub adjusted_amount: Option<f64>,
}

impl SavingsLine {
    pub fn new(category: SavingsCategory, raw_amount: f64) -> Self {
        Self {
            category,
            raw_amount,
            adjusted_amount: None,
        }
    }

    /// The amount to present: the adjusted value once scoring has run,
    /// the raw formula value before that.
    pub fn final_amount(&self) -> f64 {
        self.adjusted_amount.unwrap_or(self.raw_amount)
    }
}
