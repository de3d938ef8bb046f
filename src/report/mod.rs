//! # Comparison Reports
//!
//! [`ReportAssembler`] packages matcher output and statistics into a
//! [`ComparisonResult`] for a single scope. [`BatchReport`] collects the
//! results of a whole run and is what the CLI serializes to JSON.
//!
//! Nothing here renders HTML; the labeled fields ([`ReportLabels`],
//! [`PairRow::hover_text`]) are consumed by an external renderer.

mod summary;
mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::labels::{AUTOMATED_INTENSITY_TEXT, MANUAL_INTENSITY_TEXT, SAMPLE_TEXT};
use crate::matcher::{MatchOutcome, MatchStrategy, MatchedPair};
use crate::peak::ScopeKey;
use crate::stats::{ComparisonStatistics, StatisticsError};

pub use summary::{BatchReport, ScopeFailure};
pub use types::{ComparisonResult, PairRow, ReportLabels};

/// Builds [`ComparisonResult`]s with a fixed set of labels
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    labels: ReportLabels,
}

impl ReportAssembler {
    /// Create an assembler using the given labels
    pub fn new(labels: ReportLabels) -> Self {
        Self { labels }
    }

    /// Labels attached to every result
    pub fn labels(&self) -> &ReportLabels {
        &self.labels
    }

    /// Merge matcher output and statistics for one scope
    pub fn assemble(
        &self,
        scope: ScopeKey,
        strategy: MatchStrategy,
        outcome: MatchOutcome,
        statistics: ComparisonStatistics,
    ) -> ComparisonResult {
        let skipped: BTreeSet<usize> = statistics
            .diagnostics
            .iter()
            .filter_map(|d| match d {
                StatisticsError::NonPositiveIntensity { pair_index, .. } => Some(*pair_index),
                _ => None,
            })
            .collect();

        let mut fold_changes = statistics.log_fold_changes.iter().copied();
        let rows = outcome
            .pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let fc = if skipped.contains(&i) { None } else { fold_changes.next() };
                pair_row(pair, fc)
            })
            .collect();

        ComparisonResult {
            scope,
            strategy,
            pairs: outcome.pairs,
            unmatched_manual: outcome.unmatched_manual,
            unmatched_automated: outcome.unmatched_automated,
            empty_side: outcome.empty_side,
            statistics,
            rows,
            labels: self.labels.clone(),
        }
    }
}

fn pair_row(pair: &MatchedPair, log_fold_change: Option<f64>) -> PairRow {
    let manual_intensity = pair.manual.peak_intensity();
    let automated_intensity = pair.automated.peak_intensity();
    PairRow {
        sample_name: pair.manual.sample_name().to_string(),
        automated_sample_name: pair.automated.sample_name().to_string(),
        group_id: pair.manual.group_id().to_string(),
        compound_id: pair.manual.compound_id().to_string(),
        unique_identifier_man: pair.manual.identifier(),
        unique_identifier_auto: pair.automated.identifier(),
        manual_intensity,
        automated_intensity,
        log_fold_change,
        hover_text: format!(
            "{}{}{}{}{}{}",
            SAMPLE_TEXT,
            pair.manual.sample_name(),
            MANUAL_INTENSITY_TEXT,
            manual_intensity,
            AUTOMATED_INTENSITY_TEXT,
            automated_intensity
        ),
    }
}
