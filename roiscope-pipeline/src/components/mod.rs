pub mod category_savings_source;
pub mod clamp_inputs_hydrator;
pub mod estimate_log_side_effect;
pub mod pain_multiplier_scorer;
pub mod top_category_selector;
pub mod zero_savings_filter;
