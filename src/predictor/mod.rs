//! Reimbursement predictors
//!
//! Two independent formulas live here. `predict` is the shipped tiered
//! formula; `predict_for_analysis` is an alternative used only to explore
//! coefficient and adjustment ideas against labeled data. Changing one
//! never changes the other.

mod analysis;
pub mod args;
mod production;

pub use analysis::{predict_for_analysis, predict_for_analysis_with};
pub use args::TripArgs;
pub use production::{predict, predict_with};

use crate::trip::TripInput;
use clap::ValueEnum;

/// Round to whole cents, halves away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Which formula an analysis run evaluates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PredictorKind {
    /// Alternative formula with band multipliers, rounded to cents
    #[default]
    Analysis,
    /// Shipped three-tier formula, unrounded
    Production,
}

impl PredictorKind {
    pub fn predict(&self, trip: &TripInput) -> f64 {
        let days = i64::from(trip.days);
        match self {
            PredictorKind::Analysis => predict_for_analysis(days, trip.miles, trip.receipts),
            PredictorKind::Production => predict(days, trip.miles, trip.receipts),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PredictorKind::Analysis => "analysis",
            PredictorKind::Production => "production",
        }
    }
}
