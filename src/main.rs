//! # mzcompare
//!
//! Command-line front end for comparing manual and automated peak curation.
//!
//! ## Usage
//!
//! ```bash
//! # Compare two curated peak tables with the default strategy
//! mzcompare compare manual.csv automated.csv
//!
//! # Strategy 3 with custom tolerances, saving the JSON report
//! mzcompare compare manual.csv automated.csv -s 3 --max-delta-rt 0.1 -o report.json
//!
//! # Check that both datasets were processed with the same method file
//! mzcompare diff-settings manual_method.toml automated_method.toml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
