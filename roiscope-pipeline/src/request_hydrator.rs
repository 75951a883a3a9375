use async_trait::async_trait;

use crate::types::EstimateQuery;
use crate::util;

/// Request hydrators run before sourcing and repair or enrich the
/// query. A hydrator returns a new query; `update` copies only the
/// fields it is responsible for back onto the original.
#[async_trait]
pub trait RequestHydrator: Send + Sync {
    /// Decide if this hydrator should run for the given query.
    fn enable(&self, _query: &EstimateQuery) -> bool {
        true
    }

    /// Produce a query with this hydrator's fields populated.
    async fn hydrate(&self, query: &EstimateQuery) -> Result<EstimateQuery, String>;

    /// Copy this hydrator's fields from the hydrated query.
    fn update(&self, query: &mut EstimateQuery, hydrated: EstimateQuery);

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
