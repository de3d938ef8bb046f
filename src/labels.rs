//! Static presentation labels for the external report renderer.
//!
//! These are the only process-wide strings in the crate. Everything that
//! influences matching or statistics is passed explicitly through
//! [`crate::matcher::MatchConfig`].

/// Separator between compound and sample in a unique peak identifier
pub const IDENTIFIER_SEPARATOR: char = '@';

/// Placeholder rendered for undefined statistics
pub const NOT_AVAILABLE: &str = "NA";

/// Header name for the sample column in curated peak tables
pub const FIELD_SAMPLE_NAME: &str = "sampleName";

/// Header name for the group identifier column
pub const FIELD_GROUP_ID: &str = "groupId";

/// Header name for the compound identifier column
pub const FIELD_COMPOUND_ID: &str = "compoundId";

/// Fallback header for the compound column used by older exports
pub const FIELD_COMPOUND_NAME: &str = "compoundName";

/// Header name for the retention time column
pub const FIELD_RT: &str = "rt";

/// Header name for the m/z column
pub const FIELD_PEAK_MZ: &str = "peakMz";

/// Header name for the intensity column
pub const FIELD_PEAK_INTENSITY: &str = "peakIntensity";

/// Label for manually curated intensities
pub const MANUAL_INTENSITY: &str = "Manual Intensity";

/// Label for automatically curated intensities
pub const AUTOMATED_INTENSITY: &str = "Automated Intensity";

/// Hover-text prefix for the sample name
pub const SAMPLE_TEXT: &str = "Sample Name : ";

/// Hover-text prefix for the manual intensity
pub const MANUAL_INTENSITY_TEXT: &str = " <br>Manual Intensity : ";

/// Hover-text prefix for the automated intensity
pub const AUTOMATED_INTENSITY_TEXT: &str = " <br>Automated Intensity : ";

/// Correlation plot title
pub const COR_PLOT_MAIN_TITLE: &str = "Manual vs Automated";

/// Correlation plot x-axis title
pub const COR_PLOT_X_TITLE: &str = "Log of Average intensity automated curation";

/// Correlation plot y-axis title
pub const COR_PLOT_Y_TITLE: &str = "Log of Average intensity Manual curation";

/// Wilcoxon (volcano) plot title
pub const WILCOX_PLOT_TITLE: &str = "Wilcox Plot";

/// Wilcoxon plot x-axis title
pub const LOG2_FC: &str = "Log2FC";

/// Wilcoxon plot y-axis title
pub const NEG_LOG10_PVAL: &str = "-Log10(P-val)";

/// Message printed when two method files carry identical settings
pub const NO_SETTINGS_DIFFERENCE: &str = "No difference in method files from both the datasets";

/// Method-file table holding peak detection parameters
pub const PEAK_DETECTION_SETTINGS: &str = "PeakDetectionSettings";

/// Generic method-file settings table
pub const SETTINGS: &str = "Settings";
