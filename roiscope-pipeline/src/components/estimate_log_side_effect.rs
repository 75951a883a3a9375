use async_trait::async_trait;
use std::sync::Arc;

use crate::side_effect::{DigestSideEffect, SideEffectInput};

/// Logs the completed digest for audit and debugging.
pub struct EstimateLogSideEffect;

#[async_trait]
impl DigestSideEffect for EstimateLogSideEffect {
    async fn run(&self, input: Arc<SideEffectInput>) -> Result<(), String> {
        let total: f64 = input
            .selected_lines
            .iter()
            .map(|line| line.final_amount())
            .sum();
        log::info!(
            "request_id={} digest selected {} savings lines totaling ${:.0}",
            input.query.request_id,
            input.selected_lines.len(),
            total
        );
        Ok(())
    }
}
