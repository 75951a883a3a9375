//! Property checks for the estimate function, exercised through the
//! crate's public API only:
//! 1. Totality: every corner of the clamped domain produces finite output
//! 2. The breakdown is a true decomposition of the total
//! 3. The multiplier is order-independent (it's a set, not a sequence)
//! 4. Assumption overrides flow through the math

use std::collections::BTreeSet;

use roiscope_engine::{estimate, Assumptions, EstimateInputs, PainPoint, SavingsCategory};

fn inputs_with(pain_points: &[PainPoint]) -> EstimateInputs {
    EstimateInputs::clamped(
        50,
        8,
        12,
        500_000.0,
        pain_points.iter().copied().collect::<BTreeSet<_>>(),
    )
}

#[test]
fn every_domain_corner_is_finite() {
    let a = Assumptions::default();
    let all_points: BTreeSet<PainPoint> = PainPoint::ALL.iter().copied().collect();
    for &orders in &[5u32, 500] {
        for &staff in &[2u32, 50] {
            for &minutes in &[3u32, 20] {
                for &revenue in &[50_000.0, 10_000_000.0] {
                    for points in [BTreeSet::new(), all_points.clone()] {
                        let inputs =
                            EstimateInputs::clamped(orders, staff, minutes, revenue, points);
                        let est = estimate(&inputs, &a);
                        assert!(est.annual_savings.is_finite());
                        assert!(est.roi_percent.is_finite());
                        assert!(est.payback_months.is_finite());
                        assert!(est.investment.is_finite());
                    }
                }
            }
        }
    }
}

#[test]
fn breakdown_has_all_four_categories_in_order() {
    let est = estimate(&inputs_with(&[]), &Assumptions::default());
    let categories: Vec<SavingsCategory> =
        est.breakdown.iter().map(|l| l.category).collect();
    assert_eq!(categories, SavingsCategory::ALL.to_vec());
}

#[test]
fn multiplier_ignores_selection_order() {
    let a = Assumptions::default();
    let forward = inputs_with(&[PainPoint::ManualOrders, PainPoint::NoVisibility]);
    let backward = inputs_with(&[PainPoint::NoVisibility, PainPoint::ManualOrders]);
    assert_eq!(estimate(&forward, &a), estimate(&backward, &a));
}

#[test]
fn assumption_override_changes_the_estimate() {
    let inputs = inputs_with(&[]);
    let baseline = estimate(&inputs, &Assumptions::default());
    let doubled_rate = Assumptions {
        blended_hourly_rate: 64.0,
        ..Assumptions::default()
    };
    let boosted = estimate(&inputs, &doubled_rate);
    assert!(boosted.annual_savings > baseline.annual_savings);
}

#[test]
fn selecting_a_pain_point_never_lowers_savings_but_raises_investment() {
    let a = Assumptions::default();
    let without = estimate(&inputs_with(&[]), &a);
    let with = estimate(&inputs_with(&[PainPoint::ShippingErrors]), &a);
    assert!(with.annual_savings >= without.annual_savings);
    assert!(
        (with.investment - without.investment - a.investment_per_pain_point).abs() < 1e-9
    );
}
