use crate::line_selector::LineSelector;
use crate::types::{EstimateQuery, SavingsLine};

/// Orders lines by adjusted amount, largest first.
///
/// The default keeps all four categories; a smaller `k` produces a
/// leading-categories digest.
pub struct TopCategorySelector {
    pub k: usize,
}

impl Default for TopCategorySelector {
    fn default() -> Self {
        Self { k: 4 }
    }
}

impl LineSelector for TopCategorySelector {
    fn score(&self, line: &SavingsLine) -> f64 {
        line.final_amount()
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}
