use async_trait::async_trait;
use std::sync::Arc;

use crate::types::{EstimateQuery, SavingsLine};
use crate::util;

/// Input handed to side effects after selection completes.
#[derive(Clone)]
pub struct SideEffectInput {
    pub query: Arc<EstimateQuery>,
    pub selected_lines: Vec<SavingsLine>,
}

/// A side effect runs after selection and cannot affect the pipeline
/// result. Examples: logging the digest, caching it for a repeat query.
#[async_trait]
pub trait DigestSideEffect: Send + Sync {
    /// Decide if this side effect should run.
    fn enable(&self, _query: Arc<EstimateQuery>) -> bool {
        true
    }

    /// Execute the side effect.
    async fn run(&self, input: Arc<SideEffectInput>) -> Result<(), String>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
