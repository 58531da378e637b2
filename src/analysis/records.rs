use crate::predictor::PredictorKind;
use crate::trip::LabeledCase;
use rayon::prelude::*;

/// Prediction error for a single labeled case
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorRecord {
    pub case: LabeledCase,
    pub predicted: f64,
    /// |predicted - expected|
    pub absolute_error: f64,
    pub receipts_per_day: f64,
    /// Miles per day
    pub efficiency: f64,
}

impl ErrorRecord {
    pub fn new(case: LabeledCase, predicted: f64) -> Self {
        Self {
            case,
            predicted,
            absolute_error: (predicted - case.expected_output).abs(),
            receipts_per_day: case.input.receipts_per_day(),
            efficiency: case.input.efficiency(),
        }
    }

    /// Expected over predicted, `None` when the prediction is zero
    pub fn expected_to_predicted(&self) -> Option<f64> {
        if self.predicted == 0.0 {
            None
        } else {
            Some(self.case.expected_output / self.predicted)
        }
    }
}

/// Evaluate `predictor` on every case, preserving input order
pub fn compute_error_records(cases: &[LabeledCase], predictor: PredictorKind) -> Vec<ErrorRecord> {
    cases
        .par_iter()
        .map(|case| ErrorRecord::new(*case, predictor.predict(&case.input)))
        .collect()
}

/// Stable sort by absolute error, highest first
pub fn rank_by_error(records: &mut [ErrorRecord]) {
    records.sort_by(|a, b| b.absolute_error.total_cmp(&a.absolute_error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::TripInput;
    use approx::assert_relative_eq;

    fn case(days: u32, miles: f64, receipts: f64, expected: f64) -> LabeledCase {
        LabeledCase {
            input: TripInput::new(days, miles, receipts),
            expected_output: expected,
        }
    }

    #[test]
    fn test_record_fields() {
        let record = ErrorRecord::new(case(4, 800.0, 600.0, 900.0), 1000.0);

        assert_relative_eq!(record.absolute_error, 100.0);
        assert_relative_eq!(record.receipts_per_day, 150.0);
        assert_relative_eq!(record.efficiency, 200.0);
        assert_relative_eq!(record.expected_to_predicted().unwrap(), 0.9);
    }

    #[test]
    fn test_error_is_unsigned() {
        let over = ErrorRecord::new(case(1, 0.0, 0.0, 100.0), 150.0);
        let under = ErrorRecord::new(case(1, 0.0, 0.0, 200.0), 150.0);

        assert_eq!(over.absolute_error, 50.0);
        assert_eq!(under.absolute_error, 50.0);
    }

    #[test]
    fn test_zero_prediction_has_no_ratio() {
        let record = ErrorRecord::new(case(0, 0.0, 0.0, 10.0), 0.0);
        assert_eq!(record.expected_to_predicted(), None);
    }

    #[test]
    fn test_records_keep_input_order() {
        let cases: Vec<_> = (1..=200).map(|d| case(d, 10.0 * d as f64, 5.0, 0.0)).collect();
        let records = compute_error_records(&cases, PredictorKind::Production);

        assert_eq!(records.len(), 200);
        for (record, case) in records.iter().zip(&cases) {
            assert_eq!(record.case, *case);
        }
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let mut records = vec![
            ErrorRecord::new(case(1, 1.0, 0.0, 0.0), 10.0),
            ErrorRecord::new(case(2, 2.0, 0.0, 0.0), 30.0),
            ErrorRecord::new(case(3, 3.0, 0.0, 0.0), 10.0),
            ErrorRecord::new(case(4, 4.0, 0.0, 0.0), 10.0),
        ];
        rank_by_error(&mut records);

        let days: Vec<u32> = records.iter().map(|r| r.case.input.days).collect();
        assert_eq!(days, vec![2, 1, 3, 4]);
    }
}
