//! Load labeled cases from JSON or CSV files
//!
//! The whole file is read before parsing so that an unreadable file and a
//! malformed one are reported as distinct errors.

use super::data::CsvCaseRow;
use super::LabeledCase;
use crate::error::{DatasetError, Result};
use log::{info, warn};
use std::io::Read;
use std::path::Path;

/// Dataset path used when none is given, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "public_cases.json";

/// Load cases from `public_cases.json` in the working directory
pub fn load_default_cases() -> Result<Vec<LabeledCase>> {
    load_cases(DEFAULT_DATASET_PATH)
}

/// Load cases from a `.json` or `.csv` file
///
/// Files without an extension are treated as JSON. The file is read before
/// its extension is checked, so a missing file is always a load error.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledCase>> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| DatasetError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DatasetFormat::from_path(path)?;

    let cases = match format {
        DatasetFormat::Json => {
            load_cases_from_reader(bytes.as_slice()).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
        DatasetFormat::Csv => {
            load_cases_from_csv_reader(bytes.as_slice()).map_err(|source| DatasetError::Csv {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    let zero_day = cases.iter().filter(|c| c.input.days == 0).count();
    if zero_day > 0 {
        warn!("{} case(s) in {} have zero-day trips; their per-day ratios are not finite",
              zero_day, path.display());
    }

    info!("Loaded {} labeled cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Parse a JSON array of labeled cases
pub fn load_cases_from_reader<R: Read>(reader: R) -> serde_json::Result<Vec<LabeledCase>> {
    serde_json::from_reader(reader)
}

/// Parse CSV rows with header
/// `trip_duration_days,miles_traveled,total_receipts_amount,expected_output`
pub fn load_cases_from_csv_reader<R: Read>(reader: R) -> csv::Result<Vec<LabeledCase>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.deserialize::<CsvCaseRow>()
        .map(|row| row.map(LabeledCase::from))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(DatasetFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DatasetFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(DatasetFormat::Csv),
            Some(_) => Err(DatasetError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
