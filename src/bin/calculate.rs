//! Print the reimbursement estimate for one trip
//!
//! Usage: calculate <days> <miles> <receipts>
//!
//! Arguments are positional and taken literally; there are no flags.
//! Arguments that do not parse as numbers are treated as zero.

use reimbursement_engine::{predict, TripArgs};
use std::io::Write;

fn main() {
    env_logger::init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match TripArgs::parse(&raw) {
        Ok(args) => args,
        Err(e) => {
            log::debug!("expected 3 arguments, got {}", e.given);
            print!("{}", e);
            let _ = std::io::stdout().flush();
            std::process::exit(1);
        }
    };
    log::debug!("{:?}", args);

    print!("{:.2}", predict(args.days, args.miles, args.receipts));
    let _ = std::io::stdout().flush();
}
