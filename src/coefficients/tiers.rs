//! Receipt tiers for the production predictor

use super::{TIER_1_MAX_RECEIPTS, TIER_2_MAX_RECEIPTS};

/// Linear coefficient set for a single receipt tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierCoefficients {
    pub per_day: f64,
    pub per_mile: f64,
    pub per_receipt_dollar: f64,
    pub intercept: f64,
}

impl TierCoefficients {
    /// Evaluate the tier's linear formula
    pub fn apply(&self, days: f64, miles: f64, receipts: f64) -> f64 {
        self.per_day * days
            + self.per_mile * miles
            + self.per_receipt_dollar * receipts
            + self.intercept
    }
}

/// Three mutually exclusive receipt tiers
///
/// Tiers are selected by total receipts only; a value sitting exactly on a
/// boundary belongs to the lower tier.
#[derive(Debug, Clone)]
pub struct TierSchedule {
    /// Inclusive upper receipts bounds of tiers 1 and 2
    bounds: [f64; 2],
    tiers: [TierCoefficients; 3],
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self {
            bounds: [TIER_1_MAX_RECEIPTS, TIER_2_MAX_RECEIPTS],
            tiers: [
                TierCoefficients {
                    per_day: 53.6,
                    per_mile: 0.455,
                    per_receipt_dollar: 0.706,
                    intercept: 43.9,
                },
                TierCoefficients {
                    per_day: 38.0,
                    per_mile: 0.376,
                    per_receipt_dollar: 0.564,
                    intercept: 68.0,
                },
                TierCoefficients {
                    per_day: 32.3,
                    per_mile: 0.249,
                    per_receipt_dollar: 0.592,
                    intercept: -147.4,
                },
            ],
        }
    }
}

impl TierSchedule {
    /// Tier number (1-based) for a receipts total
    pub fn tier_for(&self, receipts: f64) -> usize {
        if receipts <= self.bounds[0] {
            1
        } else if receipts <= self.bounds[1] {
            2
        } else {
            3
        }
    }

    /// Coefficients of the tier a receipts total falls into
    pub fn coefficients_for(&self, receipts: f64) -> &TierCoefficients {
        &self.tiers[self.tier_for(receipts) - 1]
    }
}
