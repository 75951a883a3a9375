use async_trait::async_trait;
use std::sync::Arc;

use crate::components::category_savings_source::CategorySavingsSource;
use crate::components::clamp_inputs_hydrator::ClampInputsHydrator;
use crate::components::estimate_log_side_effect::EstimateLogSideEffect;
use crate::components::pain_multiplier_scorer::PainMultiplierScorer;
use crate::components::top_category_selector::TopCategorySelector;
use crate::components::zero_savings_filter::ZeroSavingsFilter;
use crate::digest::DigestPipeline;
use crate::line_filter::LineFilter;
use crate::line_scorer::LineScorer;
use crate::line_selector::LineSelector;
use crate::line_source::LineSource;
use crate::request_hydrator::RequestHydrator;
use crate::side_effect::DigestSideEffect;

/// The standard estimate digest.
///
/// Stage wiring:
/// 1. ClampInputsHydrator repairs out-of-range inputs
/// 2. CategorySavingsSource produces the four raw savings lines
/// 3. ZeroSavingsFilter drops lines contributing nothing
/// 4. PainMultiplierScorer applies the uniform pain-point multiplier
/// 5. TopCategorySelector orders lines largest-first
/// 6. EstimateLogSideEffect records the digest
pub struct EstimateDigestPipeline {
    request_hydrators: Vec<Box<dyn RequestHydrator>>,
    sources: Vec<Box<dyn LineSource>>,
    filters: Vec<Box<dyn LineFilter>>,
    scorers: Vec<Box<dyn LineScorer>>,
    selector: TopCategorySelector,
    side_effects: Arc<Vec<Box<dyn DigestSideEffect>>>,
}

impl EstimateDigestPipeline {
    /// The standard wiring, keeping every category in the digest.
    pub fn new() -> Self {
        Self::with_selection_size(4)
    }

    /// Standard wiring with a custom number of leading categories.
    pub fn with_selection_size(k: usize) -> Self {
        let request_hydrators: Vec<Box<dyn RequestHydrator>> =
            vec![Box::new(ClampInputsHydrator)];

        let sources: Vec<Box<dyn LineSource>> = vec![Box::new(CategorySavingsSource)];

        let filters: Vec<Box<dyn LineFilter>> =
            vec![Box::new(ZeroSavingsFilter::default())];

        let scorers: Vec<Box<dyn LineScorer>> = vec![Box::new(PainMultiplierScorer)];

        let selector = TopCategorySelector { k };

        let side_effects: Arc<Vec<Box<dyn DigestSideEffect>>> =
            Arc::new(vec![Box::new(EstimateLogSideEffect)]);

        Self {
            request_hydrators,
            sources,
            filters,
            scorers,
            selector,
            side_effects,
        }
    }
}

impl Default for EstimateDigestPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DigestPipeline for EstimateDigestPipeline {
    fn request_hydrators(&self) -> &[Box<dyn RequestHydrator>] {
        &self.request_hydrators
    }

    fn sources(&self) -> &[Box<dyn LineSource>] {
        &self.sources
    }

    fn filters(&self) -> &[Box<dyn LineFilter>] {
        &self.filters
    }

    fn scorers(&self) -> &[Box<dyn LineScorer>] {
        &self.scorers
    }

    fn selector(&self) -> &dyn LineSelector {
        &self.selector
    }

    fn side_effects(&self) -> Arc<Vec<Box<dyn DigestSideEffect>>> {
        Arc::clone(&self.side_effects)
    }
}
