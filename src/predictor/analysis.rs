use super::round_cents;
use crate::coefficients::AnalysisAdjustments;

/// Alternative estimate used only when exploring errors against labeled cases
///
/// Linear base followed by efficiency, duration, spending and luxury
/// multipliers, rounded to cents. There is no zero-trip shortcut here.
pub fn predict_for_analysis(days: i64, miles: f64, receipts: f64) -> f64 {
    predict_for_analysis_with(&AnalysisAdjustments::default(), days, miles, receipts)
}

/// Same as [`predict_for_analysis`] with an explicit adjustment table
pub fn predict_for_analysis_with(
    adjustments: &AnalysisAdjustments,
    days: i64,
    miles: f64,
    receipts: f64,
) -> f64 {
    let days_f = days as f64;
    let mut amount = adjustments.base.apply(days_f, miles, receipts);

    let efficiency = miles / days_f;
    let receipts_per_day = receipts / days_f;

    amount *= adjustments.efficiency_multiplier(efficiency);
    amount *= adjustments.duration_multiplier(days);
    amount *= adjustments.spending_multiplier(days, receipts, receipts_per_day);
    amount *= adjustments.luxury_multiplier(receipts, receipts_per_day);

    round_cents(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_stacked_bonuses() {
        // base 1049, efficiency 200 (x1.06), 5 days (x1.05) = 1167.537
        assert_eq!(predict_for_analysis(5, 1000.0, 200.0), 1167.54);
    }

    #[test]
    fn test_no_adjustments() {
        // 2 days, 200 miles (100/day), 100 receipts (50/day)
        // 110 + 84 + 52 + 250
        assert_eq!(predict_for_analysis(2, 200.0, 100.0), 496.0);
    }

    #[test]
    fn test_luxury_penalty_stacks() {
        // 8 days, 1600 miles (200/day), 2000 receipts (250/day)
        let base = 55.0 * 8.0 + 0.42 * 1600.0 + 0.52 * 2000.0 + 250.0;
        let expected = base * 1.06 * 0.94 * 0.7;
        assert_abs_diff_eq!(predict_for_analysis(8, 1600.0, 2000.0), expected, epsilon = 0.005);
    }

    #[test]
    fn test_long_low_effort_trip() {
        // 12 days, 600 miles (50/day), 240 receipts (20/day)
        let base = 55.0 * 12.0 + 0.42 * 600.0 + 0.52 * 240.0 + 250.0;
        let expected = base * 0.97 * 0.95;
        assert_abs_diff_eq!(predict_for_analysis(12, 600.0, 240.0), expected, epsilon = 0.005);
    }

    #[test]
    fn test_token_receipts() {
        // 3 days, 300 miles (100/day), 20 receipts
        let base = 55.0 * 3.0 + 0.42 * 300.0 + 0.52 * 20.0 + 250.0;
        assert_abs_diff_eq!(predict_for_analysis(3, 300.0, 20.0), base * 0.97, epsilon = 0.005);
    }

    #[test]
    fn test_zero_trip_has_no_shortcut() {
        // Ratios are NaN so no band matches; only the intercept remains
        assert_eq!(predict_for_analysis(0, 0.0, 0.0), 250.0);
    }

    #[test]
    fn test_always_two_decimals() {
        for days in 1..=14i64 {
            for miles in [0.0, 13.7, 99.99, 487.3, 1203.41] {
                for receipts in [0.0, 5.55, 333.33, 1777.77, 2450.01] {
                    let value = predict_for_analysis(days, miles, receipts);
                    let cents = value * 100.0;
                    assert!(
                        (cents - cents.round()).abs() < 1e-6,
                        "{} has more than two decimals",
                        value
                    );
                    let formatted = format!("{:.2}", value);
                    assert_eq!(formatted.parse::<f64>().unwrap(), value);
                }
            }
        }
    }
}
