//! Tuned coefficients and thresholds for both reimbursement formulas

mod adjustments;
mod tiers;

pub use adjustments::AnalysisAdjustments;
pub use tiers::{TierCoefficients, TierSchedule};

// ============================================================================
// Production tier boundaries
// ============================================================================
// Receipts at a boundary fall into the lower tier.

/// Upper receipts bound (inclusive) of tier 1
pub const TIER_1_MAX_RECEIPTS: f64 = 1629.0;

/// Upper receipts bound (inclusive) of tier 2
pub const TIER_2_MAX_RECEIPTS: f64 = 2141.0;

// ============================================================================
// Analysis-variant thresholds
// ============================================================================

/// Efficiency band (miles/day, inclusive) that earns the travel bonus
pub const EFFICIENT_MIN_MILES_PER_DAY: f64 = 150.0;
pub const EFFICIENT_MAX_MILES_PER_DAY: f64 = 250.0;

/// Below this many miles/day the trip is treated as low-effort
pub const LOW_EFFICIENCY_MILES_PER_DAY: f64 = 80.0;

/// Above this many miles/day the trip is treated as implausibly intense
pub const EXCESSIVE_MILES_PER_DAY: f64 = 400.0;

/// Mid-length trip band (days, inclusive)
pub const SWEET_SPOT_MIN_DAYS: i64 = 4;
pub const SWEET_SPOT_MAX_DAYS: i64 = 6;

/// Trips at least this long get the long-trip reduction
pub const LONG_TRIP_DAYS: i64 = 10;

/// Daily spend above which the overspend reduction applies
pub const HIGH_SPEND_PER_DAY: f64 = 150.0;

/// Receipts below this on multi-day trips count as a token submission
pub const TOKEN_RECEIPTS: f64 = 30.0;

/// Luxury penalty: total receipts and daily spend that must both be exceeded
pub const LUXURY_RECEIPTS: f64 = 1800.0;
pub const LUXURY_SPEND_PER_DAY: f64 = 200.0;
