use crate::peak::Source;

/// Errors that can occur while matching peaks
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// One side of the comparison has no records
    #[error("No {side} peaks to match")]
    EmptyInput {
        /// The empty side
        side: Source,
    },

    /// Matching parameters are unusable
    #[error("Invalid match configuration: {0}")]
    InvalidConfig(String),
}
