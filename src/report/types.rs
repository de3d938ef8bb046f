use serde::{Deserialize, Serialize};

use crate::labels;
use crate::matcher::{MatchStrategy, MatchedPair, UnmatchedResidue};
use crate::peak::{ScopeKey, Source};
use crate::stats::ComparisonStatistics;

/// Titles and axis labels handed to the external renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    /// Correlation plot title
    pub correlation_title: String,
    /// Correlation plot x-axis
    pub correlation_x_title: String,
    /// Correlation plot y-axis
    pub correlation_y_title: String,
    /// Wilcoxon plot title
    pub wilcoxon_title: String,
    /// Wilcoxon plot x-axis
    pub wilcoxon_x_title: String,
    /// Wilcoxon plot y-axis
    pub wilcoxon_y_title: String,
    /// Label for manual intensities
    pub manual_intensity: String,
    /// Label for automated intensities
    pub automated_intensity: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            correlation_title: labels::COR_PLOT_MAIN_TITLE.to_string(),
            correlation_x_title: labels::COR_PLOT_X_TITLE.to_string(),
            correlation_y_title: labels::COR_PLOT_Y_TITLE.to_string(),
            wilcoxon_title: labels::WILCOX_PLOT_TITLE.to_string(),
            wilcoxon_x_title: labels::LOG2_FC.to_string(),
            wilcoxon_y_title: labels::NEG_LOG10_PVAL.to_string(),
            manual_intensity: labels::MANUAL_INTENSITY.to_string(),
            automated_intensity: labels::AUTOMATED_INTENSITY.to_string(),
        }
    }
}

/// One render-ready row per matched pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRow {
    /// Manual sample name
    pub sample_name: String,
    /// Automated sample name
    pub automated_sample_name: String,
    /// Group identifier
    pub group_id: String,
    /// Compound identifier
    pub compound_id: String,
    /// `compound@sample` of the manual record
    pub unique_identifier_man: String,
    /// `compound@sample` of the automated record
    pub unique_identifier_auto: String,
    /// Manual intensity
    pub manual_intensity: f64,
    /// Automated intensity
    pub automated_intensity: f64,
    /// log2(automated / manual), absent when the pair was skipped
    pub log_fold_change: Option<f64>,
    /// Hover text for plot points
    pub hover_text: String,
}

/// Final, immutable comparison for one scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Group/compound compared
    pub scope: ScopeKey,
    /// Strategy used for matching
    pub strategy: MatchStrategy,
    /// Matched pairs in matcher order
    pub pairs: Vec<MatchedPair>,
    /// Manual records without a counterpart
    pub unmatched_manual: Vec<UnmatchedResidue>,
    /// Automated records without a counterpart
    pub unmatched_automated: Vec<UnmatchedResidue>,
    /// Side that had no records, if any
    pub empty_side: Option<Source>,
    /// Agreement statistics
    pub statistics: ComparisonStatistics,
    /// Render-ready rows, parallel to `pairs`
    pub rows: Vec<PairRow>,
    /// Presentation labels
    pub labels: ReportLabels,
}

impl ComparisonResult {
    /// Total residue on both sides
    pub fn residue_count(&self) -> usize {
        self.unmatched_manual.len() + self.unmatched_automated.len()
    }
}
