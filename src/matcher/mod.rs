//! # Peak Matcher
//!
//! Pairs manually curated peaks with automatically curated peaks of the same
//! sample within the same group/compound scope. A manual peak never pairs
//! with a peak from another sample, however close it is.
//!
//! ## Strategies
//!
//! 1. [`MatchStrategy::ByDeltaRtAndMz`]: only automated peaks inside both
//!    tolerance windows are candidates.
//! 2. [`MatchStrategy::ByNClosestRtAndMz`]: the `n_closest` nearest automated
//!    peaks are candidates, regardless of tolerance.
//! 3. [`MatchStrategy::ByClosestAndDeltaRtAndMz`]: strategy 1, falling back to
//!    strategy 2 when the window is empty. Fallback pairs are flagged
//!    [`MatchConfidence::NearestFallback`].
//!
//! The nearest candidate minimizes
//! `sqrt((Δrt / max_delta_rt)² + (Δmz / max_delta_mz)²)`, then `|Δmz|`, then
//! `|Δrt|`, then the automated identifier. Ties on every key with different
//! intensities are left unmatched as [`ResidueReason::AmbiguousTie`]. Matching is one-to-one and manual
//! peaks are processed by ascending rt, m/z and identifier.
//!
//! ```rust
//! use mzcompare::matcher::{MatchConfig, Matcher};
//! use mzcompare::peak::PeakRecordBuilder;
//!
//! let manual = vec![PeakRecordBuilder::manual()
//!     .sample("s1").scope("1", "c").rt(1.00).mz(500.00).intensity(1000.0)
//!     .build()?];
//! let automated = vec![PeakRecordBuilder::automated()
//!     .sample("s1").scope("1", "c").rt(1.02).mz(500.01).intensity(1100.0)
//!     .build()?];
//!
//! let matcher = Matcher::new(MatchConfig::default().tolerances(0.05, 0.02))?;
//! let outcome = matcher.match_peaks(&manual, &automated);
//! assert_eq!(outcome.pairs.len(), 1);
//! assert_eq!(outcome.residue_count(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod candidates;
mod config;
mod error;
mod types;


use log::debug;

use crate::peak::{PeakRecord, Source};
use candidates::{nearest, rank_all, tied_with_best, Candidate, Selection};

pub use config::{MatchConfig, MatchStrategy};
pub use error::MatchError;
pub use types::{MatchConfidence, MatchOutcome, MatchedPair, ResidueReason, UnmatchedResidue};

/// One-to-one peak matcher for a fixed configuration
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Create a matcher, validating the configuration
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match peaks, failing when either side is empty
    pub fn try_match(
        &self,
        manual: &[PeakRecord],
        automated: &[PeakRecord],
    ) -> Result<MatchOutcome, MatchError> {
        if manual.is_empty() {
            return Err(MatchError::EmptyInput { side: Source::Manual });
        }
        if automated.is_empty() {
            return Err(MatchError::EmptyInput {
                side: Source::Automated,
            });
        }
        Ok(self.match_peaks(manual, automated))
    }

    /// Match peaks.
    ///
    /// An empty side is not an error here: the outcome is valid, has no
    /// pairs, lists every record of the other side as residue and records the
    /// empty side in [`MatchOutcome::empty_side`].
    pub fn match_peaks(&self, manual: &[PeakRecord], automated: &[PeakRecord]) -> MatchOutcome {
        let mut outcome = MatchOutcome {
            empty_side: if manual.is_empty() {
                Some(Source::Manual)
            } else if automated.is_empty() {
                Some(Source::Automated)
            } else {
                None
            },
            ..Default::default()
        };

        let mut available = vec![true; automated.len()];

        for mi in processing_order(manual) {
            let record = &manual[mi];
            let pool: Vec<Candidate> = automated
                .iter()
                .enumerate()
                .filter(|(ai, a)| available[*ai] && a.can_pair_with(record))
                .map(|(ai, a)| Candidate::new(ai, record, a, &self.config))
                .collect();

            match self.select(pool) {
                (Selection::Pick(candidate), confidence) => {
                    available[candidate.index] = false;
                    outcome.pairs.push(MatchedPair {
                        manual: record.clone(),
                        automated: automated[candidate.index].clone(),
                        delta_rt: candidate.delta_rt,
                        delta_mz: candidate.delta_mz,
                        distance: candidate.distance,
                        confidence,
                    });
                }
                (Selection::Tie, _) => {
                    debug!("Ambiguous tie for manual peak {}", record.identifier());
                    outcome.unmatched_manual.push(UnmatchedResidue {
                        record: record.clone(),
                        reason: ResidueReason::AmbiguousTie,
                    });
                }
                (Selection::Nothing, _) => {
                    outcome.unmatched_manual.push(UnmatchedResidue {
                        record: record.clone(),
                        reason: ResidueReason::NoCandidateWithinTolerance,
                    });
                }
            }
        }

        outcome.unmatched_automated = automated
            .iter()
            .zip(&available)
            .filter(|(_, free)| **free)
            .map(|(record, _)| UnmatchedResidue {
                record: record.clone(),
                reason: ResidueReason::NoCandidateWithinTolerance,
            })
            .collect();

        debug!(
            "{}: {} pairs, {} manual and {} automated residues",
            self.config.strategy,
            outcome.pairs.len(),
            outcome.unmatched_manual.len(),
            outcome.unmatched_automated.len()
        );

        outcome
    }

    fn select(&self, pool: Vec<Candidate>) -> (Selection, MatchConfidence) {
        match self.config.strategy {
            MatchStrategy::ByDeltaRtAndMz => (self.within_window(pool), MatchConfidence::WithinTolerance),
            MatchStrategy::ByNClosestRtAndMz => {
                let selection = self.n_closest(pool);
                let confidence = match &selection {
                    Selection::Pick(c) if !c.within_tolerance(&self.config) => MatchConfidence::NearestFallback,
                    _ => MatchConfidence::WithinTolerance,
                };
                (selection, confidence)
            }
            MatchStrategy::ByClosestAndDeltaRtAndMz => {
                let has_window_candidate = pool.iter().any(|c| c.within_tolerance(&self.config));
                if has_window_candidate {
                    (self.within_window(pool), MatchConfidence::WithinTolerance)
                } else {
                    (self.n_closest(pool), MatchConfidence::NearestFallback)
                }
            }
        }
    }

    fn within_window(&self, pool: Vec<Candidate>) -> Selection {
        let mut inside: Vec<Candidate> = pool
            .into_iter()
            .filter(|c| c.within_tolerance(&self.config))
            .collect();
        rank_all(&mut inside);
        nearest(inside)
    }

    fn n_closest(&self, mut pool: Vec<Candidate>) -> Selection {
        rank_all(&mut pool);
        // Never cut through a group of candidates tied with the best one
        let keep = self.config.n_closest.max(tied_with_best(&pool));
        pool.truncate(keep);
        nearest(pool)
    }
}

/// Indices of `records` by ascending rt, m/z, then identifier
fn processing_order(records: &[PeakRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| {
        let (ra, rb) = (&records[a], &records[b]);
        ra.rt()
            .total_cmp(&rb.rt())
            .then_with(|| ra.peak_mz().total_cmp(&rb.peak_mz()))
            .then_with(|| ra.identifier().cmp(&rb.identifier()))
    });
    order
}
