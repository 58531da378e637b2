//! Base formula and conditional multipliers for the analysis variant
//!
//! Each multiplier looks only at the raw trip inputs and their per-day
//! ratios, never at the partially adjusted amount. A multiplier of 1.0 means
//! the condition did not match.

use super::*;

/// Multipliers applied on top of the analysis base formula
#[derive(Debug, Clone)]
pub struct AnalysisAdjustments {
    /// Linear base: 55/day, 0.42/mile, 0.52/receipt dollar, plus 250
    pub base: TierCoefficients,

    /// Efficiency in the [150, 250] mi/day band
    pub efficient_travel: f64,
    /// Efficiency below 80 mi/day
    pub low_efficiency: f64,
    /// Efficiency above 400 mi/day
    pub excessive_efficiency: f64,

    /// 4 to 6 day trips
    pub sweet_spot_duration: f64,
    /// 10+ day trips
    pub long_trip: f64,

    /// Spending above $150/day
    pub high_spending: f64,
    /// Under $30 of receipts on a multi-day trip
    pub token_receipts: f64,

    /// Over $1800 total and over $200/day
    pub luxury_penalty: f64,
}

impl Default for AnalysisAdjustments {
    fn default() -> Self {
        Self {
            base: TierCoefficients {
                per_day: 55.0,
                per_mile: 0.42,
                per_receipt_dollar: 0.52,
                intercept: 250.0,
            },
            efficient_travel: 1.06,
            low_efficiency: 0.97,
            excessive_efficiency: 0.98,
            sweet_spot_duration: 1.05,
            long_trip: 0.95,
            high_spending: 0.94,
            token_receipts: 0.97,
            luxury_penalty: 0.7,
        }
    }
}

impl AnalysisAdjustments {
    /// Efficiency band multiplier, first matching band wins
    pub fn efficiency_multiplier(&self, efficiency: f64) -> f64 {
        if (EFFICIENT_MIN_MILES_PER_DAY..=EFFICIENT_MAX_MILES_PER_DAY).contains(&efficiency) {
            self.efficient_travel
        } else if efficiency < LOW_EFFICIENCY_MILES_PER_DAY {
            self.low_efficiency
        } else if efficiency > EXCESSIVE_MILES_PER_DAY {
            self.excessive_efficiency
        } else {
            1.0
        }
    }

    /// Trip length multiplier
    pub fn duration_multiplier(&self, days: i64) -> f64 {
        if (SWEET_SPOT_MIN_DAYS..=SWEET_SPOT_MAX_DAYS).contains(&days) {
            self.sweet_spot_duration
        } else if days >= LONG_TRIP_DAYS {
            self.long_trip
        } else {
            1.0
        }
    }

    /// Spending rate multiplier
    ///
    /// The token-receipts reduction only applies when the daily spend did not
    /// already trigger the high-spending one.
    pub fn spending_multiplier(&self, days: i64, receipts: f64, receipts_per_day: f64) -> f64 {
        if receipts_per_day > HIGH_SPEND_PER_DAY {
            self.high_spending
        } else if receipts < TOKEN_RECEIPTS && days > 1 {
            self.token_receipts
        } else {
            1.0
        }
    }

    /// Extra reduction stacked on top of every other multiplier
    pub fn luxury_multiplier(&self, receipts: f64, receipts_per_day: f64) -> f64 {
        if receipts > LUXURY_RECEIPTS && receipts_per_day > LUXURY_SPEND_PER_DAY {
            self.luxury_penalty
        } else {
            1.0
        }
    }
}
