use async_trait::async_trait;

use crate::line_filter::{FilterOutcome, LineFilter};
use crate::types::{EstimateQuery, SavingsLine};

/// Removes lines that contribute nothing.
///
/// Order-processing savings hit exactly zero when the prospect already
/// runs at the optimized per-order time; showing a $0 line weakens the
/// digest, and dropping it cannot change any total.
pub struct ZeroSavingsFilter {
    pub min_amount: f64,
}

impl Default for ZeroSavingsFilter {
    fn default() -> Self {
        Self { min_amount: 0.0 }
    }
}

#[async_trait]
impl LineFilter for ZeroSavingsFilter {
    async fn filter(
        &self,
        _query: &EstimateQuery,
        lines: Vec<SavingsLine>,
    ) -> Result<FilterOutcome, String> {
        let (kept, removed): (Vec<_>, Vec<_>) = lines
            .into_iter()
            .partition(|line| line.raw_amount > self.min_amount);

        Ok(FilterOutcome { kept, removed })
    }
}
