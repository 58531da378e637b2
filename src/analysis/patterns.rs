//! Heuristic patterns counted over the highest-error records

use super::ErrorRecord;

/// Daily spend above which a record counts as high spending
pub const HIGH_SPENDING_PER_DAY: f64 = 200.0;

/// Receipts above, and expected output below, this amount mark a luxury penalty
pub const LUXURY_PENALTY_AMOUNT: f64 = 1000.0;

/// Expected/predicted ratio below which a record counts as an extreme penalty
pub const EXTREME_PENALTY_RATIO: f64 = 0.5;

/// Independent counts of each pattern; one record may match several
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCounts {
    pub high_spending_cases: usize,
    pub luxury_penalty_cases: usize,
    pub extreme_penalty_cases: usize,
}

impl PatternCounts {
    /// Count patterns across `records` (normally the worst-K slice)
    pub fn scan(records: &[ErrorRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            if is_high_spending(record) {
                counts.high_spending_cases += 1;
            }
            if is_luxury_penalty(record) {
                counts.luxury_penalty_cases += 1;
            }
            if is_extreme_penalty(record) {
                counts.extreme_penalty_cases += 1;
            }
            counts
        })
    }
}

fn is_high_spending(record: &ErrorRecord) -> bool {
    record.receipts_per_day > HIGH_SPENDING_PER_DAY
}

fn is_luxury_penalty(record: &ErrorRecord) -> bool {
    record.case.input.receipts > LUXURY_PENALTY_AMOUNT
        && record.case.expected_output < LUXURY_PENALTY_AMOUNT
}

/// A zero prediction has no ratio and never matches
fn is_extreme_penalty(record: &ErrorRecord) -> bool {
    record
        .expected_to_predicted()
        .is_some_and(|ratio| ratio < EXTREME_PENALTY_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{LabeledCase, TripInput};

    fn record(days: u32, receipts: f64, expected: f64, predicted: f64) -> ErrorRecord {
        ErrorRecord::new(
            LabeledCase {
                input: TripInput::new(days, 100.0, receipts),
                expected_output: expected,
            },
            predicted,
        )
    }

    #[test]
    fn test_empty_scan() {
        assert_eq!(PatternCounts::scan(&[]), PatternCounts::default());
    }

    #[test]
    fn test_high_spending() {
        let records = [
            record(2, 402.0, 500.0, 500.0), // 201/day
            record(2, 400.0, 500.0, 500.0), // exactly 200/day
        ];
        let counts = PatternCounts::scan(&records);

        assert_eq!(counts.high_spending_cases, 1);
        assert_eq!(counts.luxury_penalty_cases, 0);
        assert_eq!(counts.extreme_penalty_cases, 0);
    }

    #[test]
    fn test_luxury_penalty() {
        let records = [
            record(10, 1500.0, 900.0, 950.0),
            record(10, 1500.0, 1000.0, 950.0),
            record(10, 1000.0, 900.0, 950.0),
        ];
        assert_eq!(PatternCounts::scan(&records).luxury_penalty_cases, 1);
    }

    #[test]
    fn test_extreme_penalty() {
        let records = [
            record(5, 100.0, 400.0, 1000.0),
            record(5, 100.0, 500.0, 1000.0),
            // Zero prediction must not divide
            record(5, 100.0, 10.0, 0.0),
        ];
        assert_eq!(PatternCounts::scan(&records).extreme_penalty_cases, 1);
    }

    #[test]
    fn test_patterns_counted_independently() {
        // 2 days, 2400 receipts: 1200/day, expected 300 vs predicted 1500
        let records = [record(2, 2400.0, 300.0, 1500.0)];
        let counts = PatternCounts::scan(&records);

        assert_eq!(
            counts,
            PatternCounts {
                high_spending_cases: 1,
                luxury_penalty_cases: 1,
                extreme_penalty_cases: 1,
            }
        );
    }
}
