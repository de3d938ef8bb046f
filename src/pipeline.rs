//! # Comparison Pipeline
//!
//! Runs matcher, statistics and report assembly for every group/compound
//! scope present in either curation.
//!
//! Scopes are independent: each gets its own records, matcher call and
//! statistics, and a problem in one scope is recorded as a
//! [`ScopeFailure`] without touching the others. With the `parallel`
//! feature the scopes are compared on the rayon thread pool; results are
//! always returned in scope order.
//!
//! ```rust
//! use mzcompare::pipeline::{compare_batch, CompareConfig};
//! use mzcompare::peak::PeakRecordBuilder;
//!
//! let manual = vec![PeakRecordBuilder::manual()
//!     .sample("s1").scope("1", "alanine").rt(1.0).mz(90.055).intensity(1000.0)
//!     .build()?];
//! let automated = vec![PeakRecordBuilder::automated()
//!     .sample("s1").scope("1", "alanine").rt(1.01).mz(90.056).intensity(1200.0)
//!     .build()?];
//!
//! let report = compare_batch(&manual, &automated, &CompareConfig::default())?;
//! assert_eq!(report.pair_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeMap;

use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::matcher::{MatchConfig, MatchError, Matcher};
use crate::peak::{PeakRecord, PeakTable, ScopeKey};
use crate::report::{BatchReport, ComparisonResult, ReportAssembler, ReportLabels, ScopeFailure};
use crate::stats::StatisticsEngine;

/// Settings for a whole comparison run
#[derive(Debug, Clone, Default)]
pub struct CompareConfig {
    /// Matching parameters
    pub matching: MatchConfig,
    /// Labels attached to every result
    pub labels: ReportLabels,
    /// Report scopes with an empty side as failures instead of
    /// residue-only results
    pub require_both_sides: bool,
}

/// Manual and automated records of one scope
#[derive(Debug, Default)]
struct ScopeInput {
    manual: Vec<PeakRecord>,
    automated: Vec<PeakRecord>,
}

fn partition(manual: &[PeakRecord], automated: &[PeakRecord]) -> BTreeMap<ScopeKey, ScopeInput> {
    let mut scopes: BTreeMap<ScopeKey, ScopeInput> = BTreeMap::new();
    for record in manual {
        scopes.entry(record.scope()).or_default().manual.push(record.clone());
    }
    for record in automated {
        scopes.entry(record.scope()).or_default().automated.push(record.clone());
    }
    scopes
}

/// Compare the records of a single scope
pub fn compare_scope(
    scope: ScopeKey,
    manual: &[PeakRecord],
    automated: &[PeakRecord],
    matcher: &Matcher,
    assembler: &ReportAssembler,
    require_both_sides: bool,
) -> Result<ComparisonResult, MatchError> {
    let outcome = if require_both_sides {
        matcher.try_match(manual, automated)?
    } else {
        matcher.match_peaks(manual, automated)
    };
    let statistics = StatisticsEngine::new().compute(&outcome.pairs);
    debug!(
        "{}: {} pairs, r={:.4}, p={:.4}",
        scope,
        outcome.pairs.len(),
        statistics.correlation_coefficient,
        statistics.p_value
    );
    Ok(assembler.assemble(scope, matcher.config().strategy, outcome, statistics))
}

/// Compare every scope found in the two record sets.
///
/// Fails only when the matching configuration itself is invalid.
pub fn compare_batch(
    manual: &[PeakRecord],
    automated: &[PeakRecord],
    config: &CompareConfig,
) -> Result<BatchReport, MatchError> {
    let matcher = Matcher::new(config.matching)?;
    let assembler = ReportAssembler::new(config.labels.clone());
    let scopes: Vec<(ScopeKey, ScopeInput)> = partition(manual, automated).into_iter().collect();

    info!(
        "Comparing {} manual and {} automated peaks across {} scopes ({})",
        manual.len(),
        automated.len(),
        scopes.len(),
        config.matching.strategy
    );

    let run = |(scope, input): &(ScopeKey, ScopeInput)| {
        compare_scope(
            scope.clone(),
            &input.manual,
            &input.automated,
            &matcher,
            &assembler,
            config.require_both_sides,
        )
        .map_err(|e| ScopeFailure {
            scope: scope.clone(),
            error: e.to_string(),
        })
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = scopes.par_iter().map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = scopes.iter().map(run).collect();

    let mut report = BatchReport::new(config.matching);
    for outcome in outcomes {
        match outcome {
            Ok(result) => report.results.push(result),
            Err(failure) => report.failures.push(failure),
        }
    }

    info!(
        "Compared {} scopes: {} pairs, {} residues, {} failed",
        report.scope_count(),
        report.pair_count(),
        report.residue_count(),
        report.failures.len()
    );

    Ok(report)
}

/// Compare two loaded tables, carrying their rejected rows into the report
pub fn compare_tables(
    manual: &PeakTable,
    automated: &PeakTable,
    config: &CompareConfig,
) -> Result<BatchReport, MatchError> {
    let mut report = compare_batch(&manual.records, &automated.records, config)?;
    report
        .rejected_rows
        .extend(manual.rejected.iter().chain(&automated.rejected).cloned());
    Ok(report)
}
