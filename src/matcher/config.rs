use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MatchError;

/// How manual peaks are paired with automated peaks.
///
/// The integer codes (1, 2, 3) are the selectors used by the curation
/// harness and are accepted wherever a strategy is parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Only candidates inside both tolerance windows (code 1)
    #[default]
    ByDeltaRtAndMz,

    /// The nearest of the `n_closest` candidates, ignoring tolerances (code 2)
    ByNClosestRtAndMz,

    /// Tolerance window first, nearest overall as a flagged fallback (code 3)
    ByClosestAndDeltaRtAndMz,
}

impl MatchStrategy {
    /// All strategies in code order
    pub const ALL: [MatchStrategy; 3] = [
        MatchStrategy::ByDeltaRtAndMz,
        MatchStrategy::ByNClosestRtAndMz,
        MatchStrategy::ByClosestAndDeltaRtAndMz,
    ];

    /// Harness selector code
    pub fn code(&self) -> u8 {
        match self {
            MatchStrategy::ByDeltaRtAndMz => 1,
            MatchStrategy::ByNClosestRtAndMz => 2,
            MatchStrategy::ByClosestAndDeltaRtAndMz => 3,
        }
    }

    /// Kebab-case name, as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            MatchStrategy::ByDeltaRtAndMz => "by-delta-rt-and-mz",
            MatchStrategy::ByNClosestRtAndMz => "by-n-closest-rt-and-mz",
            MatchStrategy::ByClosestAndDeltaRtAndMz => "by-closest-and-delta-rt-and-mz",
        }
    }
}

impl TryFrom<u8> for MatchStrategy {
    type Error = MatchError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| MatchError::InvalidConfig(format!("unknown strategy code {}", code)))
    }
}

impl FromStr for MatchStrategy {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::try_from(code);
        }
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| MatchError::InvalidConfig(format!("unknown strategy: {}", s)))
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Matching parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Selected strategy
    pub strategy: MatchStrategy,

    /// Retention-time tolerance, in the dataset's rt unit
    pub max_delta_rt: f64,

    /// m/z tolerance
    pub max_delta_mz: f64,

    /// Number of nearest candidates considered by the nearest-neighbour strategies
    pub n_closest: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::ByDeltaRtAndMz,
            max_delta_rt: 0.05,
            max_delta_mz: 0.02,
            n_closest: 3,
        }
    }
}

impl MatchConfig {
    /// Default tolerances with the given strategy
    pub fn with_strategy(strategy: MatchStrategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Set both tolerance windows
    pub fn tolerances(mut self, max_delta_rt: f64, max_delta_mz: f64) -> Self {
        self.max_delta_rt = max_delta_rt;
        self.max_delta_mz = max_delta_mz;
        self
    }

    /// Set the candidate count for the nearest-neighbour strategies
    pub fn n_closest(mut self, n: usize) -> Self {
        self.n_closest = n;
        self
    }

    /// Check that tolerances are finite and positive and `n_closest` is non-zero
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, value) in [("max_delta_rt", self.max_delta_rt), ("max_delta_mz", self.max_delta_mz)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{} must be finite and > 0, got {}",
                    name, value
                )));
            }
        }
        if self.n_closest == 0 {
            return Err(MatchError::InvalidConfig("n_closest must be >= 1".to_string()));
        }
        Ok(())
    }
}
