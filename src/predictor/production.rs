use crate::coefficients::TierSchedule;

/// Shipped reimbursement estimate for one trip
///
/// A trip with zero days, zero miles and zero receipts reimburses exactly 0.
/// Every other input goes through the tier selected by `receipts`; nothing
/// else is validated and the result is not rounded.
pub fn predict(days: i64, miles: f64, receipts: f64) -> f64 {
    predict_with(&TierSchedule::default(), days, miles, receipts)
}

/// Same as [`predict`] with an explicit tier schedule
pub fn predict_with(schedule: &TierSchedule, days: i64, miles: f64, receipts: f64) -> f64 {
    if days == 0 && miles == 0.0 && receipts == 0.0 {
        return 0.0;
    }

    schedule
        .coefficients_for(receipts)
        .apply(days as f64, miles, receipts)
}
