//! Whole-dataset accuracy figures

use super::ErrorRecord;

/// Errors below this count as exact matches
pub const EXACT_MATCH_TOLERANCE: f64 = 0.01;

/// Errors below this count as close matches
pub const CLOSE_MATCH_TOLERANCE: f64 = 1.0;

/// Accuracy summary over every record of a run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ErrorSummary {
    pub count: usize,
    pub mean_absolute_error: f64,
    pub max_absolute_error: f64,
    pub exact_matches: usize,
    pub close_matches: usize,
    /// mean error x 100 plus 0.1 per case that is not an exact match; lower is better
    pub score: f64,
}

impl ErrorSummary {
    pub fn from_records(records: &[ErrorRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len();
        let total: f64 = records.iter().map(|r| r.absolute_error).sum();
        let max_absolute_error = records
            .iter()
            .map(|r| r.absolute_error)
            .fold(0.0, f64::max);
        let exact_matches = records
            .iter()
            .filter(|r| r.absolute_error < EXACT_MATCH_TOLERANCE)
            .count();
        let close_matches = records
            .iter()
            .filter(|r| r.absolute_error < CLOSE_MATCH_TOLERANCE)
            .count();

        let mean_absolute_error = total / count as f64;
        let score = mean_absolute_error * 100.0 + (count - exact_matches) as f64 * 0.1;

        Self {
            count,
            mean_absolute_error,
            max_absolute_error,
            exact_matches,
            close_matches,
            score,
        }
    }
}
