//! The estimate digest pipeline.
//!
//! An estimate request flows through fixed stages: request hydrators
//! repair the query, sources produce savings-line candidates, filters
//! partition them, scorers attach adjusted amounts, a selector orders
//! the survivors, and side effects run after selection without touching
//! the result. Each stage is a trait with concrete components plugged
//! into `EstimateDigestPipeline`.
//!
//! The pipeline is a presentation ordering of the engine's numbers,
//! never a second opinion: its line totals always agree with
//! `roiscope_engine::estimate` for the same query.

pub mod digest;
pub mod line_filter;
pub mod line_scorer;
pub mod line_selector;
pub mod line_source;
pub mod request_hydrator;
pub mod scenario_loader;
pub mod side_effect;
pub mod types;
pub mod util;

pub mod components;
pub mod pipelines;

pub use digest::{DigestPipeline, PipelineResult};
pub use types::{EstimateQuery, SavingsLine};
