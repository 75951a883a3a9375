//! Centralized business assumptions for the ROI estimate.
//!
//! Every dollar constant and catalog weight in the estimate is a field
//! here, not a literal in the math. The defaults are the calibrated
//! values for mid-market warehouse operations; a JSON file can override
//! any subset of fields without recompiling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::pain_points::PainPoint;

#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("Failed to read assumptions file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse assumptions file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The calibrated inputs to the savings and investment formulas.
///
/// Missing fields in an override file fall back to the defaults, so a
/// file containing only `{"blended_hourly_rate": 38.0}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assumptions {
    /// Working days per year.
    pub working_days_per_year: f64,
    /// Blended warehouse hourly rate, dollars.
    pub blended_hourly_rate: f64,
    /// Per-order processing time after optimization, minutes.
    pub optimized_order_minutes: f64,
    /// Average fully-loaded cost of one fulfillment error, dollars.
    pub error_cost: f64,
    /// Current order error rate (fraction of orders).
    pub current_error_rate: f64,
    /// Error rate after optimization (fraction of orders).
    pub optimized_error_rate: f64,
    /// Estimated inventory value as a multiple of monthly revenue.
    pub inventory_multiple: f64,
    /// Annual carrying cost as a fraction of inventory value.
    pub carrying_cost_rate: f64,
    /// Fraction of carrying cost recovered by optimization.
    pub carrying_reduction: f64,
    /// Warehouse labor efficiency gain (fraction of labor spend).
    pub labor_efficiency_gain: f64,
    /// Annual paid hours per warehouse employee.
    pub annual_hours_per_employee: f64,
    /// Engagement base fee, dollars.
    pub investment_base: f64,
    /// Engagement fee per warehouse employee, dollars.
    pub investment_per_staff: f64,
    /// Engagement fee per selected pain point, dollars.
    pub investment_per_pain_point: f64,
    /// Surcharge for high-volume operations, dollars.
    pub high_volume_surcharge: f64,
    /// Daily orders above which the high-volume surcharge applies.
    pub high_volume_threshold: u32,
    /// Payback cap in months, returned whenever annualized savings are
    /// zero or the computed payback would exceed it.
    pub payback_sentinel_months: f64,
    /// Per-entry overrides of the pain-point catalog weights.
    pub pain_weights: BTreeMap<PainPoint, f64>,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            working_days_per_year: 260.0,
            blended_hourly_rate: 32.0,
            optimized_order_minutes: 3.0,
            error_cost: 185.0,
            current_error_rate: 0.035,
            optimized_error_rate: 0.008,
            inventory_multiple: 1.5,
            carrying_cost_rate: 0.25,
            carrying_reduction: 0.15,
            labor_efficiency_gain: 0.12,
            annual_hours_per_employee: 2080.0,
            investment_base: 7_500.0,
            investment_per_staff: 500.0,
            investment_per_pain_point: 2_000.0,
            high_volume_surcharge: 3_000.0,
            high_volume_threshold: 100,
            payback_sentinel_months: 99.0,
            pain_weights: BTreeMap::new(),
        }
    }
}

impl Assumptions {
    /// Load assumptions from a JSON file, falling back to defaults for
    /// any field the file omits.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, AssumptionsError> {
        let raw = std::fs::read_to_string(path)?;
        let parsed = serde_json::from_str(&raw)?;
        Ok(parsed)
    }

    /// Effective weight for a pain point: the override if one is
    /// configured, the catalog default otherwise.
    pub fn weight_for(&self, pain_point: PainPoint) -> f64 {
        self.pain_weights
            .get(&pain_point)
            .copied()
            .unwrap_or_else(|| pain_point.default_weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_documented_values() {
        let a = Assumptions::default();
        assert!((a.working_days_per_year - 260.0).abs() < f64::EPSILON);
        assert!((a.blended_hourly_rate - 32.0).abs() < f64::EPSILON);
        assert!((a.current_error_rate - 0.035).abs() < f64::EPSILON);
        assert!((a.optimized_error_rate - 0.008).abs() < f64::EPSILON);
        assert!((a.payback_sentinel_months - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_json_override_keeps_other_defaults() {
        let a: Assumptions =
            serde_json::from_str(r#"{"blended_hourly_rate": 38.0}"#).unwrap();
        assert!((a.blended_hourly_rate - 38.0).abs() < f64::EPSILON);
        assert!((a.error_cost - 185.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weight_override_applies_per_entry() {
        let a: Assumptions =
            serde_json::from_str(r#"{"pain_weights": {"manual-orders": 1.09}}"#).unwrap();
        assert!((a.weight_for(PainPoint::ManualOrders) - 1.09).abs() < f64::EPSILON);
        // Entries without an override keep the catalog weight.
        assert!((a.weight_for(PainPoint::InventoryIssues) - 1.20).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_field_is_rejected() {
        // Typoed keys should fail loudly, not silently fall back.
        let result: Result<Assumptions, _> =
            serde_json::from_str(r#"{"blended_hourly_rat": 38.0}"#);
        assert!(result.is_err());
    }
}
