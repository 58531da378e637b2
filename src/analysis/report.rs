//! Plain-text and CSV rendering of an analysis run

use super::{ErrorAnalysis, ErrorRecord};
use serde::Serialize;
use std::io::{self, Write};

/// Fixed follow-up ideas printed after the pattern counts
pub const SUGGESTED_IMPROVEMENTS: [&str; 4] = [
    "1. Receipts > $1500 AND receipts/day > $180: Apply 0.5x multiplier",
    "2. Receipts > $2000: Apply 0.4x multiplier",
    "3. Receipts/day > $300: Apply 0.3x multiplier",
    "4. Long trips (8+ days) with high spending: Additional 0.8x multiplier",
];

/// Write the human-readable report: worst cases, pattern counts, summary
/// and suggestions. Not meant to be machine parsed.
pub fn write_report<W: Write>(out: &mut W, analysis: &ErrorAnalysis, top_n: usize) -> io::Result<()> {
    writeln!(out, "=== TOP {} HIGHEST ERROR CASES ===", top_n)?;
    for (i, record) in analysis.top(top_n).iter().enumerate() {
        write_case(out, i + 1, record)?;
    }

    let k = analysis.scanned;
    let p = &analysis.patterns;
    writeln!(out, "=== HIGH-ERROR PATTERN ANALYSIS ===")?;
    writeln!(out, "High spending cases (>$200/day) in top {} errors: {}", k, p.high_spending_cases)?;
    writeln!(out, "Luxury penalty cases (>$1000 receipts, <$1000 output) in top {}: {}", k, p.luxury_penalty_cases)?;
    writeln!(out, "Extreme penalty cases (expected < 50% of predicted) in top {}: {}", k, p.extreme_penalty_cases)?;

    let s = &analysis.summary;
    writeln!(out)?;
    writeln!(out, "=== OVERALL ACCURACY ({} predictor) ===", analysis.predictor.label())?;
    writeln!(out, "Cases: {}", s.count)?;
    writeln!(out, "Exact matches (±$0.01): {}", s.exact_matches)?;
    writeln!(out, "Close matches (±$1.00): {}", s.close_matches)?;
    writeln!(out, "Average error: ${:.2}", s.mean_absolute_error)?;
    writeln!(out, "Maximum error: ${:.2}", s.max_absolute_error)?;
    writeln!(out, "Score: {:.2}", s.score)?;

    writeln!(out)?;
    writeln!(out, "=== SUGGESTED PENALTY IMPROVEMENTS ===")?;
    for line in SUGGESTED_IMPROVEMENTS {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

fn write_case<W: Write>(out: &mut W, rank: usize, record: &ErrorRecord) -> io::Result<()> {
    let input = &record.case.input;
    writeln!(out, "Case {}: {} days, {:.0} miles, ${:.2} receipts",
             rank, input.days, input.miles, input.receipts)?;
    writeln!(out, "  Expected: ${:.2}, Predicted: ${:.2}, Error: ${:.2}",
             record.case.expected_output, record.predicted, record.absolute_error)?;
    writeln!(out, "  Receipts/day: ${:.2}, Efficiency: {:.1} mi/day",
             record.receipts_per_day, record.efficiency)?;
    writeln!(out)
}

/// One exported row of the ranked list
#[derive(Debug, Serialize)]
struct RankedRow {
    rank: usize,
    days: u32,
    miles: f64,
    receipts: f64,
    expected: f64,
    predicted: f64,
    error: f64,
    receipts_per_day: f64,
    efficiency: f64,
}

/// Export every ranked record as CSV with a header row
pub fn write_ranked_csv<W: Write>(writer: W, records: &[ErrorRecord]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, record) in records.iter().enumerate() {
        wtr.serialize(RankedRow {
            rank: i + 1,
            days: record.case.input.days,
            miles: record.case.input.miles,
            receipts: record.case.input.receipts,
            expected: record.case.expected_output,
            predicted: record.predicted,
            error: record.absolute_error,
            receipts_per_day: record.receipts_per_day,
            efficiency: record.efficiency,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
