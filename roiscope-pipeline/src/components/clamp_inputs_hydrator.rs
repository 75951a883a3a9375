use async_trait::async_trait;

use crate::request_hydrator::RequestHydrator;
use crate::types::EstimateQuery;

/// Clamps the query's inputs into their slider ranges.
///
/// Queries built through `EstimateInputs::clamped` are already in
/// range; this repairs the ones that arrived from outside the
/// constructors — a batch CSV row, a hand-built query in a test.
pub struct ClampInputsHydrator;

#[async_trait]
impl RequestHydrator for ClampInputsHydrator {
    fn enable(&self, query: &EstimateQuery) -> bool {
        !query.inputs.in_range()
    }

    async fn hydrate(&self, query: &EstimateQuery) -> Result<EstimateQuery, String> {
        let mut hydrated = query.clone();
        hydrated.inputs = hydrated.inputs.into_clamped();
        Ok(hydrated)
    }

    fn update(&self, query: &mut EstimateQuery, hydrated: EstimateQuery) {
        query.inputs = hydrated.inputs;
    }
}
