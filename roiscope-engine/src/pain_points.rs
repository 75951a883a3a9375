//! The pain-point catalog.
//!
//! A pain point is a category of operational inefficiency the prospect
//! selects. Each catalog entry carries a multiplicative weight; the
//! product of the selected weights scales the raw savings estimate.
//! The catalog is closed: exactly six entries, kebab-case on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable category of operational inefficiency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PainPoint {
    /// Orders keyed in by hand instead of flowing from the storefront.
    ManualOrders,
    /// Stock counts that don't match reality (miscounts, phantom stock).
    InventoryIssues,
    /// Wrong-item / wrong-address shipments and the returns they cause.
    ShippingErrors,
    /// Overtime and temp labor absorbing process inefficiency.
    LaborCosts,
    /// Orders sitting in queues longer than they sit in transit.
    SlowFulfillment,
    /// No live view of inventory or order status across locations.
    NoVisibility,
}

impl PainPoint {
    /// Every catalog entry, in display order.
    pub const ALL: [PainPoint; 6] = [
        PainPoint::ManualOrders,
        PainPoint::InventoryIssues,
        PainPoint::ShippingErrors,
        PainPoint::LaborCosts,
        PainPoint::SlowFulfillment,
        PainPoint::NoVisibility,
    ];

    /// Catalog weight for this entry. All weights sit in [1.08, 1.20];
    /// callers may override per entry through `Assumptions::pain_weights`.
    pub fn default_weight(&self) -> f64 {
        match self {
            PainPoint::ManualOrders => 1.15,
            PainPoint::InventoryIssues => 1.20,
            PainPoint::ShippingErrors => 1.12,
            PainPoint::LaborCosts => 1.10,
            PainPoint::SlowFulfillment => 1.10,
            PainPoint::NoVisibility => 1.08,
        }
    }

    /// Human-readable label for reports and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            PainPoint::ManualOrders => "Manual Order Entry",
            PainPoint::InventoryIssues => "Inventory Inaccuracy",
            PainPoint::ShippingErrors => "Shipping Errors",
            PainPoint::LaborCosts => "High Labor Costs",
            PainPoint::SlowFulfillment => "Slow Fulfillment",
            PainPoint::NoVisibility => "No Real-Time Visibility",
        }
    }

    /// Wire slug, matching the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            PainPoint::ManualOrders => "manual-orders",
            PainPoint::InventoryIssues => "inventory-issues",
            PainPoint::ShippingErrors => "shipping-errors",
            PainPoint::LaborCosts => "labor-costs",
            PainPoint::SlowFulfillment => "slow-fulfillment",
            PainPoint::NoVisibility => "no-visibility",
        }
    }

    /// Parse a wire slug back into a catalog entry.
    pub fn from_slug(slug: &str) -> Option<PainPoint> {
        PainPoint::ALL
            .iter()
            .copied()
            .find(|p| p.slug() == slug.trim())
    }
}

impl fmt::Display for PainPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
