//! The digest pipeline contract and its executor.
//!
//! `execute` runs the fixed stage order: request hydrators → sources →
//! filters → scorers → selector → side effects. Stage failures are
//! logged and skipped — a broken hydrator or side effect degrades the
//! digest, it never aborts it. Filters and scorers receive the lines
//! kept so far; side effects receive only the final selection.

use async_trait::async_trait;
use std::sync::Arc;

use crate::line_filter::LineFilter;
use crate::line_scorer::LineScorer;
use crate::line_selector::LineSelector;
use crate::line_source::LineSource;
use crate::request_hydrator::RequestHydrator;
use crate::side_effect::{DigestSideEffect, SideEffectInput};
use crate::types::{EstimateQuery, SavingsLine};

/// Everything the pipeline produced for one query.
#[derive(Clone, Debug)]
pub struct PipelineResult {
    /// The query after hydration.
    pub query: EstimateQuery,
    /// Every line the sources produced.
    pub retrieved_lines: Vec<SavingsLine>,
    /// Lines the filters removed.
    pub removed_lines: Vec<SavingsLine>,
    /// The ordered final selection.
    pub selected_lines: Vec<SavingsLine>,
}

/// A digest pipeline is a set of concrete components, one accessor per
/// stage. `execute` is the shared driver.
#[async_trait]
pub trait DigestPipeline: Send + Sync {
    fn request_hydrators(&self) -> &[Box<dyn RequestHydrator>];
    fn sources(&self) -> &[Box<dyn LineSource>];
    fn filters(&self) -> &[Box<dyn LineFilter>];
    fn scorers(&self) -> &[Box<dyn LineScorer>];
    fn selector(&self) -> &dyn LineSelector;
    fn side_effects(&self) -> Arc<Vec<Box<dyn DigestSideEffect>>>;

    /// Run the full stage order for one query.
    async fn execute(&self, query: EstimateQuery) -> PipelineResult {
        let mut query = query;

        for hydrator in self.request_hydrators() {
            if !hydrator.enable(&query) {
                continue;
            }
            match hydrator.hydrate(&query).await {
                Ok(hydrated) => hydrator.update(&mut query, hydrated),
                Err(e) => log::warn!(
                    "request_id={} hydrator {} failed: {}",
                    query.request_id,
                    hydrator.name(),
                    e
                ),
            }
        }

        let mut retrieved: Vec<SavingsLine> = Vec::new();
        for source in self.sources() {
            if !source.enable(&query) {
                continue;
            }
            match source.lines(&query).await {
                Ok(mut lines) => retrieved.append(&mut lines),
                Err(e) => log::warn!(
                    "request_id={} source {} failed: {}",
                    query.request_id,
                    source.name(),
                    e
                ),
            }
        }

        let mut kept = retrieved.clone();
        let mut removed: Vec<SavingsLine> = Vec::new();
        for filter in self.filters() {
            if !filter.enable(&query) {
                continue;
            }
            match filter.filter(&query, kept.clone()).await {
                Ok(outcome) => {
                    kept = outcome.kept;
                    removed.extend(outcome.removed);
                }
                Err(e) => log::warn!(
                    "request_id={} filter {} failed, lines pass through: {}",
                    query.request_id,
                    filter.name(),
                    e
                ),
            }
        }

        for scorer in self.scorers() {
            if !scorer.enable(&query) {
                continue;
            }
            match scorer.score(&query, &kept).await {
                Ok(scored) => {
                    for (line, scored_line) in kept.iter_mut().zip(scored) {
                        scorer.update(line, scored_line);
                    }
                }
                Err(e) => log::warn!(
                    "request_id={} scorer {} failed: {}",
                    query.request_id,
                    scorer.name(),
                    e
                ),
            }
        }

        let selected = self.selector().select(&query, kept);

        let input = Arc::new(SideEffectInput {
            query: Arc::new(query.clone()),
            selected_lines: selected.clone(),
        });
        for side_effect in self.side_effects().iter() {
            if !side_effect.enable(Arc::clone(&input.query)) {
                continue;
            }
            if let Err(e) = side_effect.run(Arc::clone(&input)).await {
                log::warn!(
                    "request_id={} side effect {} failed: {}",
                    query.request_id,
                    side_effect.name(),
                    e
                );
            }
        }

        PipelineResult {
            query,
            retrieved_lines: retrieved,
            removed_lines: removed,
            selected_lines: selected,
        }
    }
}
