/// Errors that can occur while building or loading peak records
#[derive(Debug, thiserror::Error)]
pub enum PeakError {
    /// Retention time or m/z is NaN or infinite
    #[error("Non-finite {field}: {value}")]
    NonFiniteValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Intensity below zero (or NaN)
    #[error("Intensity must be >= 0, got {0}")]
    NegativeIntensity(f64),

    /// A required field was never set on the builder or was empty in a row
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A required column is absent from the table header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A numeric cell could not be parsed
    #[error("Invalid number in column {column}: {value:?}")]
    InvalidNumber {
        /// Column the cell belongs to
        column: &'static str,
        /// Raw cell contents
        value: String,
    },

    /// A row is not valid UTF-8
    #[error("Invalid UTF-8 in field {field}")]
    InvalidUtf8 {
        /// 0-based index of the offending field
        field: usize,
    },

    /// I/O error reading a peak table
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}
