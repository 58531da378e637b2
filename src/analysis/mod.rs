//! Error analysis of a predictor against labeled cases
//!
//! One pass computes an [`ErrorRecord`] per case, ranks them by absolute
//! error (highest first) and aggregates pattern counts over the worst cases.

mod patterns;
mod records;
pub mod report;
mod summary;

pub use patterns::PatternCounts;
pub use records::{compute_error_records, rank_by_error, ErrorRecord};
pub use report::{write_ranked_csv, write_report, SUGGESTED_IMPROVEMENTS};
pub use summary::ErrorSummary;

use crate::predictor::PredictorKind;
use crate::trip::LabeledCase;
use log::debug;
use std::time::Instant;

/// Number of cases printed in the detail section
pub const DEFAULT_TOP_N: usize = 20;

/// Number of highest-error cases scanned for patterns
pub const DEFAULT_WORST_K: usize = 50;

/// Result of one analysis pass
#[derive(Debug, Clone)]
pub struct ErrorAnalysis {
    pub predictor: PredictorKind,
    /// Records sorted by absolute error, highest first
    pub ranked: Vec<ErrorRecord>,
    /// Pattern counts over the worst `min(worst_k, len)` records
    pub patterns: PatternCounts,
    /// How many records the pattern scan covered
    pub scanned: usize,
    pub summary: ErrorSummary,
}

impl ErrorAnalysis {
    /// Run the full analysis with the default worst-case window
    pub fn run(cases: &[LabeledCase], predictor: PredictorKind) -> Self {
        Self::run_with_window(cases, predictor, DEFAULT_WORST_K)
    }

    pub fn run_with_window(cases: &[LabeledCase], predictor: PredictorKind, worst_k: usize) -> Self {
        let start = Instant::now();

        let mut ranked = compute_error_records(cases, predictor);
        debug!("Computed {} error records in {:?}", ranked.len(), start.elapsed());

        rank_by_error(&mut ranked);

        let scanned = worst_k.min(ranked.len());
        let patterns = PatternCounts::scan(&ranked[..scanned]);
        debug!("Pattern scan over worst {}: {:?}", scanned, patterns);

        let summary = ErrorSummary::from_records(&ranked);

        Self {
            predictor,
            ranked,
            patterns,
            scanned,
            summary,
        }
    }

    /// The `n` highest-error records, or all of them if there are fewer
    pub fn top(&self, n: usize) -> &[ErrorRecord] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}
