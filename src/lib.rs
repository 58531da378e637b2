//! Travel reimbursement engine
//!
//! Estimates a reimbursement amount from trip duration, miles traveled and
//! submitted receipts, and measures formula error against labeled cases.

pub mod analysis;
pub mod coefficients;
pub mod error;
pub mod predictor;
pub mod trip;

pub use analysis::{ErrorRecord, ErrorSummary, PatternCounts};
pub use error::{DatasetError, Result, UsageError};
pub use predictor::{predict, predict_for_analysis, PredictorKind, TripArgs};
pub use trip::{LabeledCase, TripInput};
