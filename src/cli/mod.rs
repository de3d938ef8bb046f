use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mzcompare::matcher::MatchStrategy;

mod compare;
mod config;
mod settings;

/// mzcompare - Manual vs Automated Peak Curation Comparison
#[derive(Parser)]
#[command(name = "mzcompare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match manual against automated peaks and report agreement statistics
    Compare {
        /// Manually curated peak table (CSV, or TSV for .tsv/.txt)
        #[arg(value_name = "MANUAL")]
        manual: PathBuf,

        /// Automatically curated peak table
        #[arg(value_name = "AUTOMATED")]
        automated: PathBuf,

        /// Matching strategy: 1/by-delta-rt-and-mz, 2/by-n-closest-rt-and-mz,
        /// 3/by-closest-and-delta-rt-and-mz
        #[arg(short = 's', long)]
        strategy: Option<MatchStrategy>,

        /// Retention-time tolerance
        #[arg(long)]
        max_delta_rt: Option<f64>,

        /// m/z tolerance
        #[arg(long)]
        max_delta_mz: Option<f64>,

        /// Candidates considered by the nearest-neighbour strategies
        #[arg(short = 'n', long)]
        n_closest: Option<usize>,

        /// Fail scopes where one curation has no peaks
        #[arg(long)]
        require_both_sides: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the JSON report to this file
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Method file of the manual dataset
        #[arg(long, value_name = "FILE", requires = "automated_settings")]
        manual_settings: Option<PathBuf>,

        /// Method file of the automated dataset
        #[arg(long, value_name = "FILE", requires = "manual_settings")]
        automated_settings: Option<PathBuf>,
    },

    /// Compare the peak detection settings of two method files
    DiffSettings {
        /// Method file of the manual dataset
        #[arg(value_name = "MANUAL")]
        manual: PathBuf,

        /// Method file of the automated dataset
        #[arg(value_name = "AUTOMATED")]
        automated: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compare {
            manual,
            automated,
            strategy,
            max_delta_rt,
            max_delta_mz,
            n_closest,
            require_both_sides,
            config,
            output,
            manual_settings,
            automated_settings,
        } => compare::run(compare::CompareArgs {
            manual,
            automated,
            strategy,
            max_delta_rt,
            max_delta_mz,
            n_closest,
            require_both_sides,
            config,
            output,
            settings: manual_settings.zip(automated_settings),
        }),
        Commands::DiffSettings { manual, automated } => settings::run(manual, automated),
    }
}
