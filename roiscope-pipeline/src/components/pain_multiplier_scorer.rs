use async_trait::async_trait;

use roiscope_engine::engine::pain_multiplier;

use crate::line_scorer::LineScorer;
use crate::types::{EstimateQuery, SavingsLine};

/// Applies the pain-point multiplier uniformly to every line.
///
/// Uniformity is the invariant that makes the breakdown honest: every
/// category is scaled by the same factor, so the adjusted lines still
/// sum to the engine's total annual savings.
pub struct PainMultiplierScorer;

#[async_trait]
impl LineScorer for PainMultiplierScorer {
    async fn score(
        &self,
        query: &EstimateQuery,
        lines: &[SavingsLine],
    ) -> Result<Vec<SavingsLine>, String> {
        let multiplier = pain_multiplier(&query.inputs.pain_points, &query.assumptions);

        Ok(lines
            .iter()
            .map(|line| SavingsLine {
                adjusted_amount: Some(line.raw_amount * multiplier),
                ..line.clone()
            })
            .collect())
    }

    fn update(&self, line: &mut SavingsLine, scored: SavingsLine) {
        line.adjusted_amount = scored.adjusted_amount;
    }
}
