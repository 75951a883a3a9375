use async_trait::async_trait;

use roiscope_engine::engine::category_savings;
use roiscope_engine::SavingsCategory;

use crate::line_source::LineSource;
use crate::types::{EstimateQuery, SavingsLine};

/// Produces one savings line per category, with the raw formula amount.
///
/// The pain-point multiplier is deliberately NOT applied here — that is
/// the scorer's job, so the raw and adjusted views stay separable.
pub struct CategorySavingsSource;

#[async_trait]
impl LineSource for CategorySavingsSource {
    async fn lines(&self, query: &EstimateQuery) -> Result<Vec<SavingsLine>, String> {
        Ok(SavingsCategory::ALL
            .iter()
            .map(|&category| {
                SavingsLine::new(
                    category,
                    category_savings(category, &query.inputs, &query.assumptions),
                )
            })
            .collect())
    }
}
