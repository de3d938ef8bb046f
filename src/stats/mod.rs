//! # Agreement Statistics
//!
//! Computes how well automated curation reproduces manual curation over a
//! set of [`MatchedPair`]s:
//!
//! - Pearson correlation of log intensities
//! - per-pair log2 fold-change (`automated / manual`)
//! - two-sided Wilcoxon signed-rank test on the paired log2 differences
//!
//! Problems with individual pairs never abort the computation. Pairs with a
//! zero intensity are skipped, statistics without enough data are reported as
//! NaN, and both cases are recorded in
//! [`ComparisonStatistics::diagnostics`].

mod correlation;
mod error;
mod wilcoxon;


use log::warn;
use serde::Serialize;

use crate::matcher::MatchedPair;

pub use correlation::pearson;
pub use error::StatisticsError;
pub use wilcoxon::{signed_rank, WilcoxonMethod, WilcoxonResult, EXACT_MAX_N};

/// Aggregate agreement statistics for one scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonStatistics {
    /// Pearson correlation of ln intensities, NaN when undefined
    pub correlation_coefficient: f64,
    /// Wilcoxon signed-rank p-value, NaN when undefined
    pub p_value: f64,
    /// Wilcoxon `min(W+, W-)`, NaN when undefined
    pub wilcoxon_statistic: f64,
    /// How the p-value was computed
    pub wilcoxon_method: Option<WilcoxonMethod>,
    /// log2(automated / manual) per usable pair, in matcher order
    pub log_fold_changes: Vec<f64>,
    /// Mean manual intensity over usable pairs
    pub mean_manual_intensity: f64,
    /// Mean automated intensity over usable pairs
    pub mean_automated_intensity: f64,
    /// log2(mean automated intensity / mean manual intensity); not the mean
    /// of `log_fold_changes`
    pub log2_mean_ratio: f64,
    /// Pairs handed to the engine
    pub pairs_total: usize,
    /// Pairs with positive intensity on both sides
    pub pairs_used: usize,
    /// Recoverable problems met along the way
    pub diagnostics: Vec<StatisticsError>,
}

impl ComparisonStatistics {
    /// `-log10(p)` for the Wilcoxon plot, NaN when the p-value is undefined
    pub fn neg_log10_p_value(&self) -> f64 {
        -self.p_value.log10()
    }

    /// Whether the correlation could be computed
    pub fn has_correlation(&self) -> bool {
        !self.correlation_coefficient.is_nan()
    }
}

/// Stateless calculator for [`ComparisonStatistics`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Compute statistics over pairs in the order given
    pub fn compute(&self, pairs: &[MatchedPair]) -> ComparisonStatistics {
        let mut diagnostics = Vec::new();
        let mut ln_manual = Vec::with_capacity(pairs.len());
        let mut ln_automated = Vec::with_capacity(pairs.len());
        let mut log_fold_changes = Vec::with_capacity(pairs.len());
        let mut sum_manual = 0.0;
        let mut sum_automated = 0.0;

        for (pair_index, pair) in pairs.iter().enumerate() {
            let manual = pair.manual.peak_intensity();
            let automated = pair.automated.peak_intensity();
            if manual <= 0.0 || automated <= 0.0 {
                let diagnostic = StatisticsError::NonPositiveIntensity {
                    pair_index,
                    manual_id: pair.manual.identifier(),
                    automated_id: pair.automated.identifier(),
                    manual_intensity: manual,
                    automated_intensity: automated,
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                continue;
            }

            ln_manual.push(manual.ln());
            ln_automated.push(automated.ln());
            log_fold_changes.push((automated / manual).log2());
            sum_manual += manual;
            sum_automated += automated;
        }

        let pairs_used = log_fold_changes.len();

        let correlation_coefficient = match pearson(&ln_manual, &ln_automated) {
            Some(r) => r,
            None => {
                diagnostics.push(StatisticsError::InsufficientData {
                    statistic: "correlation",
                    detail: if pairs_used < 2 {
                        format!("{} usable pairs, need at least 2", pairs_used)
                    } else {
                        "zero variance in log intensities".to_string()
                    },
                });
                f64::NAN
            }
        };

        let (p_value, wilcoxon_statistic, wilcoxon_method) = match signed_rank(&log_fold_changes) {
            Some(result) => (result.p_value, result.statistic, Some(result.method)),
            None => {
                diagnostics.push(StatisticsError::InsufficientData {
                    statistic: "wilcoxon",
                    detail: "no usable pairs".to_string(),
                });
                (f64::NAN, f64::NAN, None)
            }
        };

        let (mean_manual_intensity, mean_automated_intensity, log2_mean_ratio) = if pairs_used > 0 {
            let mean_manual = sum_manual / pairs_used as f64;
            let mean_automated = sum_automated / pairs_used as f64;
            (mean_manual, mean_automated, (mean_automated / mean_manual).log2())
        } else {
            (f64::NAN, f64::NAN, f64::NAN)
        };

        ComparisonStatistics {
            correlation_coefficient,
            p_value,
            wilcoxon_statistic,
            wilcoxon_method,
            log_fold_changes,
            mean_manual_intensity,
            mean_automated_intensity,
            log2_mean_ratio,
            pairs_total: pairs.len(),
            pairs_used,
            diagnostics,
        }
    }
}
