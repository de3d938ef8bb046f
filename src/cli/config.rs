//! TOML configuration file support.
//!
//! Instead of passing many CLI flags, users can specify settings in a config file:
//!
//! ```toml
//! # mzcompare.toml
//! [matching]
//! strategy = 3            # or "by-closest-and-delta-rt-and-mz"
//! max_delta_rt = 0.1
//! max_delta_mz = 0.01
//! n_closest = 5
//! require_both_sides = false
//!
//! [report]
//! correlation_title = "Manual vs Automated (QC run)"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mzcompare::matcher::MatchStrategy;
use mzcompare::report::ReportLabels;

/// Root configuration structure for mzcompare.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Matching settings.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Label overrides for the report; unspecified labels keep their defaults.
    pub report: Option<ReportLabels>,
}

/// A strategy given either as its harness code or its name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StrategySetting {
    /// Harness selector code (1, 2 or 3)
    Code(u8),
    /// Kebab-case strategy name
    Name(String),
}

impl StrategySetting {
    pub fn resolve(&self) -> Result<MatchStrategy> {
        let strategy = match self {
            StrategySetting::Code(code) => MatchStrategy::try_from(*code)?,
            StrategySetting::Name(name) => name.parse::<MatchStrategy>()?,
        };
        Ok(strategy)
    }
}

/// Configuration for the compare command.
#[derive(Debug, Default, Deserialize)]
pub struct MatchingConfig {
    /// Matching strategy.
    pub strategy: Option<StrategySetting>,

    /// Retention-time tolerance.
    pub max_delta_rt: Option<f64>,

    /// m/z tolerance.
    pub max_delta_mz: Option<f64>,

    /// Candidates considered by the nearest-neighbour strategies.
    pub n_closest: Option<usize>,

    /// Fail scopes where one curation has no peaks.
    pub require_both_sides: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [matching]
            strategy = 3
            max_delta_rt = 0.1
            max_delta_mz = 0.01
            n_closest = 5
            require_both_sides = true

            [report]
            wilcoxon_title = "Volcano"
        "#;

        let config = Config::from_str(toml).unwrap();
        let strategy = config.matching.strategy.as_ref().unwrap().resolve().unwrap();
        assert_eq!(strategy, MatchStrategy::ByClosestAndDeltaRtAndMz);
        assert_eq!(config.matching.max_delta_rt, Some(0.1));
        assert_eq!(config.matching.max_delta_mz, Some(0.01));
        assert_eq!(config.matching.n_closest, Some(5));
        assert_eq!(config.matching.require_both_sides, Some(true));

        let labels = config.report.unwrap();
        assert_eq!(labels.wilcoxon_title, "Volcano");
        assert_eq!(labels.correlation_title, ReportLabels::default().correlation_title);
    }

    #[test]
    fn test_strategy_by_name() {
        let toml = r#"
            [matching]
            strategy = "by-n-closest-rt-and-mz"
        "#;

        let config = Config::from_str(toml).unwrap();
        let strategy = config.matching.strategy.unwrap().resolve().unwrap();
        assert_eq!(strategy, MatchStrategy::ByNClosestRtAndMz);
    }

    #[test]
    fn test_unknown_strategy_code() {
        let config = Config::from_str("[matching]\nstrategy = 9\n").unwrap();
        assert!(config.matching.strategy.unwrap().resolve().is_err());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.matching.strategy.is_none());
        assert!(config.report.is_none());
    }
}
