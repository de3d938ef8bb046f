use serde::Serialize;

/// Recoverable problems met while computing statistics.
///
/// These are collected in [`super::ComparisonStatistics::diagnostics`] rather
/// than returned as errors.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatisticsError {
    /// A pair with a zero intensity on either side was skipped
    #[error("Skipped pair {pair_index} ({manual_id} / {automated_id}): non-positive intensity {manual_intensity} / {automated_intensity}")]
    NonPositiveIntensity {
        /// Position of the pair in matcher order
        pair_index: usize,
        /// Manual record identifier
        manual_id: String,
        /// Automated record identifier
        automated_id: String,
        /// Manual intensity
        manual_intensity: f64,
        /// Automated intensity
        automated_intensity: f64,
    },

    /// Too few usable pairs for a statistic, reported as NaN
    #[error("Insufficient data for {statistic}: {detail}")]
    InsufficientData {
        /// Statistic that could not be computed
        statistic: &'static str,
        /// What was missing
        detail: String,
    },
}
