//! Plain-text report rendering.
//!
//! The rendered block is what a prospect receives by email and what the
//! CRM stores as the lead's `message` field: a newline-delimited,
//! human-readable snapshot of the inputs and every derived output.
//! Deterministic — no timestamps, no randomness — so the same estimate
//! always renders the same report.

use crate::engine::Estimate;
use crate::inputs::EstimateInputs;

/// Format a dollar amount with comma thousands separators, rounded to
/// whole dollars.
pub fn format_dollars(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };

    if whole < 1_000 {
        return format!("{}${}", sign, whole);
    }

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped.chars().rev().collect::<String>())
}

/// Render the newline-delimited report block for an estimate.
pub fn render_report(inputs: &EstimateInputs, estimate: &Estimate) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("ROI Estimate — Warehouse Operations".to_string());
    lines.push(String::new());
    lines.push(format!("Daily orders: {}", inputs.daily_orders));
    lines.push(format!("Warehouse staff: {}", inputs.warehouse_staff));
    lines.push(format!(
        "Order processing time: {} min",
        inputs.order_time_minutes
    ));
    lines.push(format!(
        "Monthly revenue: {}",
        format_dollars(inputs.monthly_revenue)
    ));

    if inputs.pain_points.is_empty() {
        lines.push("Pain points: none selected".to_string());
    } else {
        let labels: Vec<&str> = inputs.pain_points.iter().map(|p| p.label()).collect();
        lines.push(format!("Pain points: {}", labels.join(", ")));
    }

    lines.push(String::new());
    lines.push("Estimated annual savings by category:".to_string());
    for line in &estimate.breakdown {
        lines.push(format!(
            "  {}: {}",
            line.category,
            format_dollars(line.amount)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total annual savings: {}",
        format_dollars(estimate.annual_savings)
    ));
    lines.push(format!(
        "Estimated investment: {}",
        format_dollars(estimate.investment)
    ));
    lines.push(format!("First-year ROI: {:.0}%", estimate.roi_percent));
    lines.push(format!(
        "Payback period: {:.1} months",
        estimate.payback_months
    ));

    lines.join("\n")
}
