//! CSV scenario loader for batch evaluation.
//!
//! Parses scenario CSV files into `ScenarioRecord` structs.
//! Expected CSV columns:
//!   scenario_id, daily_orders, warehouse_staff, order_time_minutes,
//!   monthly_revenue, pain_points
//! where `pain_points` is a semicolon-separated list of catalog slugs
//! (empty for none), e.g. `manual-orders;inventory-issues`.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;

use roiscope_engine::{EstimateInputs, PainPoint};

/// One row of a batch scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRecord {
    pub scenario_id: String,
    pub daily_orders: u32,
    pub warehouse_staff: u32,
    pub order_time_minutes: u32,
    pub monthly_revenue: f64,
    #[serde(deserialize_with = "deserialize_pain_points")]
    pub pain_points: BTreeSet<PainPoint>,
}

impl ScenarioRecord {
    /// Convert to clamped estimate inputs (drops scenario_id).
    pub fn to_inputs(&self) -> EstimateInputs {
        EstimateInputs::clamped(
            self.daily_orders,
            self.warehouse_staff,
            self.order_time_minutes,
            self.monthly_revenue,
            self.pain_points.clone(),
        )
    }
}

/// Load scenario records from a CSV reader.
pub fn load_scenarios<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: ScenarioRecord = result
            .map_err(|e| format!("CSV parse error at line {}: {}", line_num + 2, e))?;
        records.push(record);
    }

    Ok(records)
}

/// Load scenario records from a CSV file path.
pub fn load_scenarios_file(path: &str) -> Result<Vec<ScenarioRecord>, String> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    load_scenarios(file)
}

/// Semicolon-separated slug list parser. Empty cells and stray
/// semicolons are fine; an unrecognized slug names itself in the error.
fn deserialize_pain_points<'de, D>(deserializer: D) -> Result<BTreeSet<PainPoint>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let mut points = BTreeSet::new();
    for slug in raw.split(';') {
        let slug = slug.trim();
        if slug.is_empty() {
            continue;
        }
        match PainPoint::from_slug(slug) {
            Some(point) => {
                points.insert(point);
            }
            None => {
                return Err(serde::de::Error::custom(format!(
                    "unknown pain point '{}'",
                    slug
                )))
            }
        }
    }
    Ok(points)
}
