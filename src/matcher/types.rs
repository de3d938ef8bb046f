use serde::Serialize;

use crate::peak::{PeakRecord, Source};

/// How much a pairing can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// Both deltas are inside the tolerance windows
    WithinTolerance,
    /// Nearest candidate outside the tolerance windows
    NearestFallback,
}

/// One manual record linked to one automated record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPair {
    /// Manually curated peak
    pub manual: PeakRecord,
    /// Automatically curated peak
    pub automated: PeakRecord,
    /// `automated.rt - manual.rt`
    pub delta_rt: f64,
    /// `automated.peak_mz - manual.peak_mz`
    pub delta_mz: f64,
    /// Combined tolerance-normalized distance
    pub distance: f64,
    /// Whether the pair lies inside the tolerance windows
    pub confidence: MatchConfidence,
}

/// Why a record ended up without a counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidueReason {
    /// Nothing eligible was left in the candidate pool
    NoCandidateWithinTolerance,
    /// Several indistinguishable candidates with different intensities
    AmbiguousTie,
}

/// A record with no counterpart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmatchedResidue {
    /// The unmatched record
    pub record: PeakRecord,
    /// Why it was left over
    pub reason: ResidueReason,
}

/// Everything the matcher produced for one invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// Pairs in manual processing order
    pub pairs: Vec<MatchedPair>,
    /// Manual records without a counterpart
    pub unmatched_manual: Vec<UnmatchedResidue>,
    /// Automated records never consumed, in input order
    pub unmatched_automated: Vec<UnmatchedResidue>,
    /// Set when one side had no records at all
    pub empty_side: Option<Source>,
}

impl MatchOutcome {
    /// Number of residues on both sides
    pub fn residue_count(&self) -> usize {
        self.unmatched_manual.len() + self.unmatched_automated.len()
    }

    /// Iterate over all residues, manual first
    pub fn residues(&self) -> impl Iterator<Item = &UnmatchedResidue> {
        self.unmatched_manual.iter().chain(self.unmatched_automated.iter())
    }
}
