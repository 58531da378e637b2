//! Rank labeled cases by prediction error and report patterns in the worst ones
//!
//! Reads public_cases.json from the working directory unless another dataset
//! path is given. Any load or parse failure aborts before a report is printed.

use anyhow::{Context, Result};
use clap::Parser;
use reimbursement_engine::analysis::{
    write_ranked_csv, write_report, ErrorAnalysis, DEFAULT_TOP_N, DEFAULT_WORST_K,
};
use reimbursement_engine::trip::{load_cases, DEFAULT_DATASET_PATH};
use reimbursement_engine::PredictorKind;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "analyze_extremes", about = "Error analysis against labeled reimbursement cases")]
struct Cli {
    /// Labeled dataset (.json or .csv)
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Number of highest-error cases to print in detail
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Number of highest-error cases scanned for patterns
    #[arg(long, default_value_t = DEFAULT_WORST_K)]
    worst: usize,

    /// Formula to evaluate
    #[arg(long, value_enum, default_value_t = PredictorKind::Analysis)]
    predictor: PredictorKind,

    /// Also write every ranked record to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let cases = load_cases(&cli.dataset)
        .with_context(|| format!("Error loading dataset {}", cli.dataset.display()))?;
    log::debug!("Dataset ready in {:?}", start.elapsed());

    let analysis = ErrorAnalysis::run_with_window(&cases, cli.predictor, cli.worst);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &analysis, cli.top).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    if let Some(path) = &cli.csv_out {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_ranked_csv(BufWriter::new(file), &analysis.ranked)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Ranked records written to {}", path.display());
    }

    log::debug!("Total time: {:?}", start.elapsed());
    Ok(())
}
