use async_trait::async_trait;

use crate::types::{EstimateQuery, SavingsLine};
use crate::util;

/// Sources produce savings-line candidates for a query.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Decide if this source should run for the given query.
    fn enable(&self, _query: &EstimateQuery) -> bool {
        true
    }

    /// Produce the candidate lines.
    async fn lines(&self, query: &EstimateQuery) -> Result<Vec<SavingsLine>, String>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
