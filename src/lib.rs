//! # mzcompare - Manual vs Automated Peak Curation Comparison
//!
//! `mzcompare` checks how well an automated peak-curation pipeline reproduces
//! the peaks a human reviewer picked in the same LC-MS dataset.
//!
//! ## Pipeline
//!
//! 1. **Load**: curated peaks ([`peak::PeakRecord`]) come from CSV/TSV exports
//!    via [`peak::PeakTable`] or are built directly.
//! 2. **Match**: [`matcher::Matcher`] pairs manual and automated peaks of the
//!    same group/compound by retention time and m/z, using one of three
//!    [`matcher::MatchStrategy`] variants.
//! 3. **Score**: [`stats::StatisticsEngine`] computes the Pearson correlation
//!    of log intensities, per-pair log2 fold-changes and a Wilcoxon
//!    signed-rank p-value.
//! 4. **Report**: [`report::ReportAssembler`] packages everything into a
//!    render-ready [`report::ComparisonResult`].
//!
//! [`pipeline::compare_batch`] runs all four steps for every scope of a run.
//!
//! ## Quick Start
//!
//! ```rust
//! use mzcompare::prelude::*;
//!
//! let manual = vec![PeakRecordBuilder::manual()
//!     .sample("testsample_1")
//!     .scope("1", "glutamate")
//!     .rt(1.00)
//!     .mz(500.00)
//!     .intensity(1000.0)
//!     .build()?];
//! let automated = vec![PeakRecordBuilder::automated()
//!     .sample("testsample_1")
//!     .scope("1", "glutamate")
//!     .rt(1.02)
//!     .mz(500.01)
//!     .intensity(1100.0)
//!     .build()?];
//!
//! let config = CompareConfig {
//!     matching: MatchConfig::with_strategy(MatchStrategy::ByDeltaRtAndMz).tolerances(0.05, 0.02),
//!     ..Default::default()
//! };
//! let report = compare_batch(&manual, &automated, &config)?;
//!
//! let result = &report.results[0];
//! assert_eq!(result.pairs.len(), 1);
//! assert!((result.statistics.log_fold_changes[0] - 1.1f64.log2()).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `colorized_output` (default): colored terminal summaries via `console`
//! - `parallel`: compare scopes on the rayon thread pool

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod labels;
pub mod matcher;
pub mod peak;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod stats;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::matcher::{
        MatchConfidence, MatchConfig, MatchError, MatchOutcome, MatchStrategy, MatchedPair, Matcher,
        ResidueReason, UnmatchedResidue,
    };
    pub use crate::peak::{PeakError, PeakRecord, PeakRecordBuilder, PeakTable, ScopeKey, Source};
    pub use crate::pipeline::{compare_batch, compare_scope, compare_tables, CompareConfig};
    pub use crate::report::{BatchReport, ComparisonResult, PairRow, ReportAssembler, ReportLabels};
    pub use crate::settings::{MethodSettings, SettingsDiff};
    pub use crate::stats::{ComparisonStatistics, StatisticsEngine, StatisticsError};
}
