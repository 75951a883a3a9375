use async_trait::async_trait;

use crate::types::{EstimateQuery, SavingsLine};
use crate::util;

/// Scorers compute per-line adjusted amounts. `score` returns scored
/// copies positionally matching its input; `update` copies only the
/// fields this scorer owns back onto the pipeline's lines, so scorers
/// compose without clobbering each other.
#[async_trait]
pub trait LineScorer: Send + Sync {
    /// Decide if this scorer should run for the given query.
    fn enable(&self, _query: &EstimateQuery) -> bool {
        true
    }

    /// Score the lines, returning one scored copy per input line.
    async fn score(
        &self,
        query: &EstimateQuery,
        lines: &[SavingsLine],
    ) -> Result<Vec<SavingsLine>, String>;

    /// Copy this scorer's fields from the scored copy.
    fn update(&self, line: &mut SavingsLine, scored: SavingsLine);

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
