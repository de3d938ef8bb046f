use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use mzcompare::matcher::{MatchConfig, MatchStrategy};
use mzcompare::peak::{PeakTable, Source};
use mzcompare::pipeline::{compare_tables, CompareConfig};
use mzcompare::settings::MethodSettings;

use super::config::Config;

/// Arguments of the compare command
pub struct CompareArgs {
    pub manual: PathBuf,
    pub automated: PathBuf,
    pub strategy: Option<MatchStrategy>,
    pub max_delta_rt: Option<f64>,
    pub max_delta_mz: Option<f64>,
    pub n_closest: Option<usize>,
    pub require_both_sides: bool,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub settings: Option<(PathBuf, PathBuf)>,
}

/// Command-line flags override the config file, which overrides defaults.
fn resolve_config(args: &CompareArgs) -> Result<CompareConfig> {
    let file = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let defaults = MatchConfig::default();

    let file_strategy = file.matching.strategy.as_ref().map(|s| s.resolve()).transpose()?;

    let matching = MatchConfig {
        strategy: args.strategy.or(file_strategy).unwrap_or(defaults.strategy),
        max_delta_rt: args
            .max_delta_rt
            .or(file.matching.max_delta_rt)
            .unwrap_or(defaults.max_delta_rt),
        max_delta_mz: args
            .max_delta_mz
            .or(file.matching.max_delta_mz)
            .unwrap_or(defaults.max_delta_mz),
        n_closest: args.n_closest.or(file.matching.n_closest).unwrap_or(defaults.n_closest),
    };

    Ok(CompareConfig {
        matching,
        labels: file.report.unwrap_or_default(),
        require_both_sides: args.require_both_sides || file.matching.require_both_sides.unwrap_or(false),
    })
}

/// Match both curations and print (and optionally save) the report
pub fn run(args: CompareArgs) -> Result<()> {
    for path in [&args.manual, &args.automated] {
        if !path.exists() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
    }

    let config = resolve_config(&args)?;

    info!("mzcompare - Manual vs Automated");
    info!("===============================");
    info!("Manual:    {}", args.manual.display());
    info!("Automated: {}", args.automated.display());
    info!("Strategy:  {} (code {})", config.matching.strategy, config.matching.strategy.code());

    let manual = PeakTable::from_path(&args.manual, Source::Manual)
        .with_context(|| format!("Failed to load manual peaks: {}", args.manual.display()))?;
    let automated = PeakTable::from_path(&args.automated, Source::Automated)
        .with_context(|| format!("Failed to load automated peaks: {}", args.automated.display()))?;

    let mut report = compare_tables(&manual, &automated, &config).context("Comparison failed")?;

    if let Some((manual_settings, automated_settings)) = &args.settings {
        let manual_method = MethodSettings::from_file(manual_settings)
            .with_context(|| format!("Failed to load method file: {}", manual_settings.display()))?;
        let automated_method = MethodSettings::from_file(automated_settings)
            .with_context(|| format!("Failed to load method file: {}", automated_settings.display()))?;
        report.settings_diff = Some(manual_method.diff(&automated_method));
    }

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    if let Some(output) = &args.output {
        let json = report.to_json().context("Failed to serialize report")?;
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write report: {}", output.display()))?;
        info!("Report written to {}", output.display());
    }

    if !report.rejected_rows.is_empty() {
        warn!("{} rows were rejected while loading", report.rejected_rows.len());
    }

    // Exit with error code if any scope failed
    if !report.failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
