use crate::types::{EstimateQuery, SavingsLine};
use crate::util;

/// Selectors sort and truncate the line list after scoring.
pub trait LineSelector: Send + Sync {
    /// Default selection: sort and truncate.
    fn select(&self, _query: &EstimateQuery, lines: Vec<SavingsLine>) -> Vec<SavingsLine> {
        let mut sorted = self.sort(lines);
        if let Some(limit) = self.size() {
            sorted.truncate(limit);
        }
        sorted
    }

    /// Extract the sort key from a line.
    fn score(&self, line: &SavingsLine) -> f64;

    /// Sort lines by score, descending.
    ///
    /// NaN scores sort to the end so they can never head the digest.
    /// A hostile assumptions file is the only way to produce one, but
    /// the ordering must stay total regardless.
    fn sort(&self, lines: Vec<SavingsLine>) -> Vec<SavingsLine> {
        let mut sorted = lines;
        sorted.sort_by(|a, b| {
            let sa = self.score(a);
            let sb = self.score(b);
            match (sa.is_nan(), sb.is_nan()) {
                (true, true) => std::cmp::Ordering::Equal,
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal),
            }
        });
        sorted
    }

    /// Maximum number of lines to keep; `None` means no truncation.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}
