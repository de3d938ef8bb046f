use std::cmp::Ordering;

use super::MatchConfig;
use crate::peak::PeakRecord;

/// Relative slack on the tolerance windows, so that a delta which is equal to
/// the tolerance in decimal (1.05 - 1.00 vs 0.05) is still inside
pub(super) const TOLERANCE_SLACK: f64 = 1e-9;

/// An automated record evaluated against one manual record
#[derive(Debug, Clone)]
pub(super) struct Candidate {
    pub index: usize,
    pub delta_rt: f64,
    pub delta_mz: f64,
    pub distance: f64,
    pub identifier: String,
    pub intensity: f64,
}

impl Candidate {
    pub fn new(index: usize, manual: &PeakRecord, automated: &PeakRecord, config: &MatchConfig) -> Self {
        let delta_rt = automated.rt() - manual.rt();
        let delta_mz = automated.peak_mz() - manual.peak_mz();
        let distance =
            ((delta_rt / config.max_delta_rt).powi(2) + (delta_mz / config.max_delta_mz).powi(2)).sqrt();
        Self {
            index,
            delta_rt,
            delta_mz,
            distance,
            identifier: automated.identifier(),
            intensity: automated.peak_intensity(),
        }
    }

    pub fn within_tolerance(&self, config: &MatchConfig) -> bool {
        self.delta_rt.abs() <= config.max_delta_rt * (1.0 + TOLERANCE_SLACK)
            && self.delta_mz.abs() <= config.max_delta_mz * (1.0 + TOLERANCE_SLACK)
    }

    /// Nearest-pick order: distance, |Δm/z|, |Δrt|, identifier
    pub fn rank(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.delta_mz.abs().total_cmp(&other.delta_mz.abs()))
            .then_with(|| self.delta_rt.abs().total_cmp(&other.delta_rt.abs()))
            .then_with(|| self.identifier.cmp(&other.identifier))
    }
}

/// Result of choosing among candidates
#[derive(Debug)]
pub(super) enum Selection {
    Pick(Candidate),
    Tie,
    Nothing,
}

/// Order candidates best-first. The sort is stable so equal candidates keep
/// their pool order.
pub(super) fn rank_all(candidates: &mut [Candidate]) {
    candidates.sort_by(Candidate::rank);
}

/// Number of leading candidates equal to the best one on every ranking key
pub(super) fn tied_with_best(ranked: &[Candidate]) -> usize {
    match ranked.first() {
        Some(best) => ranked.iter().take_while(|c| c.rank(best) == Ordering::Equal).count(),
        None => 0,
    }
}

/// Pick the best of already-ranked candidates.
///
/// Candidates equal on every ranking key are interchangeable only if their
/// intensities agree; otherwise the choice is reported as a tie.
pub(super) fn nearest(mut ranked: Vec<Candidate>) -> Selection {
    if ranked.is_empty() {
        return Selection::Nothing;
    }
    let tied = tied_with_best(&ranked);
    let ambiguous = ranked[1..tied].iter().any(|c| c.intensity != ranked[0].intensity);
    if ambiguous {
        return Selection::Tie;
    }
    Selection::Pick(ranked.swap_remove(0))
}
