use serde::Deserialize;

/// A single expense claim
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TripInput {
    /// Trip duration in days (expected to be at least 1)
    #[serde(rename = "trip_duration_days")]
    pub days: u32,

    #[serde(rename = "miles_traveled")]
    pub miles: f64,

    /// Total receipts submitted, in dollars
    #[serde(rename = "total_receipts_amount")]
    pub receipts: f64,
}

impl TripInput {
    pub fn new(days: u32, miles: f64, receipts: f64) -> Self {
        Self { days, miles, receipts }
    }

    /// Daily spending rate. Non-finite when `days` is 0.
    pub fn receipts_per_day(&self) -> f64 {
        self.receipts / f64::from(self.days)
    }

    /// Miles per day. Non-finite when `days` is 0.
    pub fn efficiency(&self) -> f64 {
        self.miles / f64::from(self.days)
    }
}

/// A trip together with its known reimbursement
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LabeledCase {
    pub input: TripInput,
    pub expected_output: f64,
}

/// Flat row layout used by CSV datasets
#[derive(Debug, Deserialize)]
pub(crate) struct CsvCaseRow {
    trip_duration_days: u32,
    miles_traveled: f64,
    total_receipts_amount: f64,
    expected_output: f64,
}

impl From<CsvCaseRow> for LabeledCase {
    fn from(row: CsvCaseRow) -> Self {
        Self {
            input: TripInput::new(
                row.trip_duration_days,
                row.miles_traveled,
                row.total_receipts_amount,
            ),
            expected_output: row.expected_output,
        }
    }
}
