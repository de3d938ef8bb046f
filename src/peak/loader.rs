use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use super::{PeakError, PeakRecord, Source};
use crate::labels::{
    FIELD_COMPOUND_ID, FIELD_COMPOUND_NAME, FIELD_GROUP_ID, FIELD_PEAK_INTENSITY, FIELD_PEAK_MZ,
    FIELD_RT, FIELD_SAMPLE_NAME,
};

/// A row that could not be turned into a [`PeakRecord`]
#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the source file (header is line 1)
    pub line: u64,
    /// Curation the row belonged to
    pub source: Source,
    /// Why the row was rejected
    pub reason: String,
}

/// Peaks loaded from one curated export
#[derive(Debug, Clone, Default)]
pub struct PeakTable {
    /// Valid records in file order
    pub records: Vec<PeakRecord>,
    /// Rows that failed validation
    pub rejected: Vec<RejectedRow>,
}

/// Column positions resolved from the header row
struct ColumnIndex {
    sample_name: usize,
    group_id: usize,
    compound_id: usize,
    rt: usize,
    peak_mz: usize,
    peak_intensity: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, PeakError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| PeakError::MissingColumn(name.to_string()));

        let compound_id = match find(FIELD_COMPOUND_ID).or_else(|| find(FIELD_COMPOUND_NAME)) {
            Some(i) => i,
            None => return Err(PeakError::MissingColumn(FIELD_COMPOUND_ID.to_string())),
        };

        Ok(Self {
            sample_name: require(FIELD_SAMPLE_NAME)?,
            group_id: require(FIELD_GROUP_ID)?,
            compound_id,
            rt: require(FIELD_RT)?,
            peak_mz: require(FIELD_PEAK_MZ)?,
            peak_intensity: require(FIELD_PEAK_INTENSITY)?,
        })
    }
}

impl PeakTable {
    /// Load a curated peak table, choosing the delimiter from the extension
    /// (`.tsv` and `.txt` are tab-separated, anything else comma-separated).
    pub fn from_path<P: AsRef<Path>>(path: P, source: Source) -> Result<Self, PeakError> {
        let path = path.as_ref();
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("txt") => b'\t',
            _ => b',',
        };
        debug!("Loading {} peaks from {}", source, path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), source, delimiter)
    }

    /// Load a curated peak table from any reader
    pub fn from_reader<R: Read>(reader: R, source: Source, delimiter: u8) -> Result<Self, PeakError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(csv_reader.headers()?)?;
        let mut table = PeakTable::default();

        for row in csv_reader.byte_records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let parsed = csv::StringRecord::from_byte_record(row)
                .map_err(|e| PeakError::InvalidUtf8 {
                    field: e.utf8_error().field(),
                })
                .and_then(|row| parse_row(&row, &columns, source));
            match parsed {
                Ok(record) => table.records.push(record),
                Err(e) => {
                    warn!("Rejected {} row at line {}: {}", source, line, e);
                    table.rejected.push(RejectedRow {
                        line,
                        source,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(table)
    }
}

fn cell<'a>(row: &'a csv::StringRecord, idx: usize, name: &'static str) -> Result<&'a str, PeakError> {
    match row.get(idx).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PeakError::MissingField(name)),
    }
}

fn number_cell(row: &csv::StringRecord, idx: usize, name: &'static str) -> Result<f64, PeakError> {
    let raw = cell(row, idx, name)?;
    raw.parse::<f64>().map_err(|_| PeakError::InvalidNumber {
        column: name,
        value: raw.to_string(),
    })
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnIndex, source: Source) -> Result<PeakRecord, PeakError> {
    PeakRecord::new(
        cell(row, columns.sample_name, FIELD_SAMPLE_NAME)?,
        cell(row, columns.group_id, FIELD_GROUP_ID)?,
        cell(row, columns.compound_id, FIELD_COMPOUND_ID)?,
        number_cell(row, columns.rt, FIELD_RT)?,
        number_cell(row, columns.peak_mz, FIELD_PEAK_MZ)?,
        number_cell(row, columns.peak_intensity, FIELD_PEAK_INTENSITY)?,
        source,
    )
}
