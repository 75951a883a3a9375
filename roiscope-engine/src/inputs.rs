//! Estimate inputs and their slider ranges.
//!
//! The five inputs mirror the prospect-facing controls. Every field is
//! range-clamped on construction, so the estimate function downstream is
//! total over its domain and needs no error path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::pain_points::PainPoint;

/// Inclusive daily-order-volume range.
pub const DAILY_ORDERS_MIN: u32 = 5;
pub const DAILY_ORDERS_MAX: u32 = 500;

/// Inclusive warehouse-staff range.
pub const WAREHOUSE_STAFF_MIN: u32 = 2;
pub const WAREHOUSE_STAFF_MAX: u32 = 50;

/// Inclusive per-order processing-time range, in minutes.
pub const ORDER_TIME_MIN: u32 = 3;
pub const ORDER_TIME_MAX: u32 = 20;

/// Inclusive monthly-revenue range, in dollars.
pub const MONTHLY_REVENUE_MIN: f64 = 50_000.0;
pub const MONTHLY_REVENUE_MAX: f64 = 10_000_000.0;

/// The five business inputs to the estimator.
///
/// `pain_points` is a set: selecting an entry twice is meaningless, and
/// the multiplier must not depend on selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInputs {
    pub daily_orders: u32,
    pub warehouse_staff: u32,
    pub order_time_minutes: u32,
    pub monthly_revenue: f64,
    pub pain_points: BTreeSet<PainPoint>,
}

impl EstimateInputs {
    /// Build inputs with every field clamped into its slider range.
    pub fn clamped(
        daily_orders: u32,
        warehouse_staff: u32,
        order_time_minutes: u32,
        monthly_revenue: f64,
        pain_points: BTreeSet<PainPoint>,
    ) -> Self {
        Self {
            daily_orders: daily_orders.clamp(DAILY_ORDERS_MIN, DAILY_ORDERS_MAX),
            warehouse_staff: warehouse_staff.clamp(WAREHOUSE_STAFF_MIN, WAREHOUSE_STAFF_MAX),
            order_time_minutes: order_time_minutes.clamp(ORDER_TIME_MIN, ORDER_TIME_MAX),
            monthly_revenue: monthly_revenue.clamp(MONTHLY_REVENUE_MIN, MONTHLY_REVENUE_MAX),
            pain_points,
        }
    }

    /// Re-clamp an existing record (used by the pipeline's input hydrator
    /// on records that arrived from outside the constructors, e.g. CSV).
    pub fn into_clamped(self) -> Self {
        Self::clamped(
            self.daily_orders,
            self.warehouse_staff,
            self.order_time_minutes,
            self.monthly_revenue,
            self.pain_points,
        )
    }

    /// True when every field already sits inside its range.
    pub fn in_range(&self) -> bool {
        (DAILY_ORDERS_MIN..=DAILY_ORDERS_MAX).contains(&self.daily_orders)
            && (WAREHOUSE_STAFF_MIN..=WAREHOUSE_STAFF_MAX).contains(&self.warehouse_staff)
            && (ORDER_TIME_MIN..=ORDER_TIME_MAX).contains(&self.order_time_minutes)
            && (MONTHLY_REVENUE_MIN..=MONTHLY_REVENUE_MAX).contains(&self.monthly_revenue)
    }
}

impl Default for EstimateInputs {
    /// The fixed starting configuration shown before the prospect touches
    /// any control.
    fn default() -> Self {
        Self {
            daily_orders: 50,
            warehouse_staff: 8,
            order_time_minutes: 12,
            monthly_revenue: 500_000.0,
            pain_points: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping_lands_on_range_edges() {
        let inputs = EstimateInputs::clamped(1, 100, 99, 1.0, BTreeSet::new());
        assert_eq!(inputs.daily_orders, DAILY_ORDERS_MIN);
        assert_eq!(inputs.warehouse_staff, WAREHOUSE_STAFF_MAX);
        assert_eq!(inputs.order_time_minutes, ORDER_TIME_MAX);
        assert!((inputs.monthly_revenue - MONTHLY_REVENUE_MIN).abs() < f64::EPSILON);
        assert!(inputs.in_range());
    }

    #[test]
    fn in_range_values_pass_through_untouched() {
        let inputs = EstimateInputs::clamped(50, 8, 12, 500_000.0, BTreeSet::new());
        assert_eq!(inputs, EstimateInputs::default());
    }

    #[test]
    fn default_is_in_range() {
        assert!(EstimateInputs::default().in_range());
    }

    #[test]
    fn into_clamped_repairs_out_of_range_record() {
        let mut inputs = EstimateInputs::default();
        inputs.monthly_revenue = 99_000_000.0;
        let repaired = inputs.into_clamped();
        assert!((repaired.monthly_revenue - MONTHLY_REVENUE_MAX).abs() < f64::EPSILON);
    }
}
