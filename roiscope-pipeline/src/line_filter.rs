use async_trait::async_trait;

use crate::types::{EstimateQuery, SavingsLine};
use crate::util;

/// Result of a filter pass, partitioning lines into kept and removed.
pub struct FilterOutcome {
    pub kept: Vec<SavingsLine>,
    pub removed: Vec<SavingsLine>,
}

/// Filters run sequentially; removed lines are excluded from scoring
/// and selection but stay available in the pipeline result.
#[async_trait]
pub trait LineFilter: Send + Sync {
    /// Decide if this filter should run for the given query.
    fn enable(&self, _query: &EstimateQuery) -> bool {
        true
    }

    /// Partition the lines.
    async fn filter(
        &self,
        query: &EstimateQuery,
        lines: Vec<SavingsLine>,
    ) -> Result<FilterOutcome, String>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
