//! Lenient parsing of the predictor's three positional arguments
//!
//! Nothing is validated beyond the argument count: a value that does not
//! parse becomes zero, and an integer day count outside the `i64` range
//! saturates instead of failing.

use crate::error::UsageError;

/// Trip values as given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripArgs {
    pub days: i64,
    pub miles: f64,
    pub receipts: f64,
}

impl TripArgs {
    /// Parse the arguments that follow the program name
    ///
    /// Every argument is taken literally, including `--` and anything that
    /// looks like a flag.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        match args {
            [days, miles, receipts] => Ok(Self {
                days: parse_days(days.as_ref()),
                miles: parse_amount(miles.as_ref()),
                receipts: parse_amount(receipts.as_ref()),
            }),
            _ => Err(UsageError { given: args.len() }),
        }
    }
}

/// Whole day count; out-of-range integers clamp to `i64::MIN`/`i64::MAX`
pub fn parse_days(raw: &str) -> i64 {
    if let Ok(days) = raw.parse::<i64>() {
        return days;
    }

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    if negative {
        i64::MIN
    } else {
        i64::MAX
    }
}

/// Miles or receipts; anything unparseable is zero
pub fn parse_amount(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}
