use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[cfg(feature = "colorized_output")]
use console::style;

use super::ComparisonResult;
use crate::labels::NOT_AVAILABLE;
use crate::matcher::MatchConfig;
use crate::peak::{RejectedRow, ScopeKey};
use crate::settings::SettingsDiff;

/// A scope whose comparison could not be produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeFailure {
    /// The failed scope
    pub scope: ScopeKey,
    /// Error message
    pub error: String,
}

/// Results of comparing every scope of a run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Matching parameters shared by all scopes
    pub config: MatchConfig,
    /// Per-scope results, ordered by scope
    pub results: Vec<ComparisonResult>,
    /// Scopes that failed without affecting the others
    pub failures: Vec<ScopeFailure>,
    /// Loader rows that never became records
    pub rejected_rows: Vec<RejectedRow>,
    /// Method file differences, when both method files were supplied
    pub settings_diff: Option<SettingsDiff>,
}

impl BatchReport {
    /// Create an empty report for the given configuration
    pub fn new(config: MatchConfig) -> Self {
        Self {
            generated_at: Utc::now(),
            config,
            results: Vec::new(),
            failures: Vec::new(),
            rejected_rows: Vec::new(),
            settings_diff: None,
        }
    }

    /// Number of scopes compared successfully
    pub fn scope_count(&self) -> usize {
        self.results.len()
    }

    /// Matched pairs over all scopes
    pub fn pair_count(&self) -> usize {
        self.results.iter().map(|r| r.pairs.len()).sum()
    }

    /// Residue over all scopes
    pub fn residue_count(&self) -> usize {
        self.results.iter().map(|r| r.residue_count()).sum()
    }

    /// Statistics diagnostics over all scopes
    pub fn diagnostic_count(&self) -> usize {
        self.results.iter().map(|r| r.statistics.diagnostics.len()).sum()
    }

    /// Whether any scope failed or any row was rejected
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty() || !self.rejected_rows.is_empty()
    }

    /// Find the result for a scope
    pub fn result_for(&self, scope: &ScopeKey) -> Option<&ComparisonResult> {
        self.results.iter().find(|r| &r.scope == scope)
    }

    /// Serialize to pretty JSON. Undefined statistics become `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Manual vs Automated Curation").bold().cyan()));
            output.push_str(&format!("{}\n", style("============================").cyan()));
            output.push_str(&format!(
                "{}: {} (rt ±{}, m/z ±{}, n={})\n\n",
                style("Strategy").bold(),
                self.config.strategy,
                self.config.max_delta_rt,
                self.config.max_delta_mz,
                self.config.n_closest
            ));

            for result in &self.results {
                let stats = &result.statistics;
                let p = fmt_stat(stats.p_value);
                let p_styled = if stats.p_value < 0.05 {
                    style(p).red()
                } else {
                    style(p).green()
                };
                output.push_str(&format!(
                    "  {}  pairs={} residue={} r={} p={} log2MeanRatio={}\n",
                    style(&result.scope).bold(),
                    result.pairs.len(),
                    result.residue_count(),
                    fmt_stat(stats.correlation_coefficient),
                    p_styled,
                    fmt_stat(stats.log2_mean_ratio)
                ));
            }

            for failure in &self.failures {
                output.push_str(&format!(
                    "  {}  {}: {}\n",
                    style(&failure.scope).bold(),
                    style("FAILED").red().bold(),
                    failure.error
                ));
            }

            if let Some(diff) = &self.settings_diff {
                output.push('\n');
                output.push_str(&format!("{}\n", style("Method settings").bold()));
                output.push_str(&diff.to_string());
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} scopes, {} pairs, {} residues, {} failed, {} rejected rows\n",
                style("Summary").bold(),
                style(self.scope_count()).green(),
                style(self.pair_count()).green(),
                style(self.residue_count()).yellow(),
                style(self.failures.len()).red(),
                style(self.rejected_rows.len()).red()
            ));

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.4}", value)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Manual vs Automated Curation")?;
        writeln!(f, "============================")?;
        writeln!(
            f,
            "Strategy: {} (rt ±{}, m/z ±{}, n={})",
            self.config.strategy, self.config.max_delta_rt, self.config.max_delta_mz, self.config.n_closest
        )?;
        writeln!(f)?;

        for result in &self.results {
            let stats = &result.statistics;
            writeln!(
                f,
                "  {}  pairs={} residue={} r={} p={} log2MeanRatio={}",
                result.scope,
                result.pairs.len(),
                result.residue_count(),
                fmt_stat(stats.correlation_coefficient),
                fmt_stat(stats.p_value),
                fmt_stat(stats.log2_mean_ratio)
            )?;
        }

        for failure in &self.failures {
            writeln!(f, "  {}  FAILED: {}", failure.scope, failure.error)?;
        }

        if let Some(diff) = &self.settings_diff {
            writeln!(f)?;
            writeln!(f, "Method settings")?;
            write!(f, "{}", diff)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} scopes, {} pairs, {} residues, {} failed, {} rejected rows",
            self.scope_count(),
            self.pair_count(),
            self.residue_count(),
            self.failures.len(),
            self.rejected_rows.len()
        )
    }
}
