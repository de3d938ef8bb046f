use std::fmt;

use serde::{Deserialize, Serialize};

use super::PeakError;
use crate::labels::IDENTIFIER_SEPARATOR;

/// Which curation produced a peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Selected by a human reviewer
    Manual,
    /// Selected by the automated detection pipeline
    Automated,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Manual => write!(f, "manual"),
            Source::Automated => write!(f, "automated"),
        }
    }
}

/// The (group, compound) context inside which peaks are matched
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScopeKey {
    /// Group identifier
    pub group_id: String,
    /// Compound identifier
    pub compound_id: String,
}

impl ScopeKey {
    /// Create a scope key
    pub fn new(group_id: impl Into<String>, compound_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            compound_id: compound_id.into(),
        }
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group_id, self.compound_id)
    }
}

/// A single curated peak.
///
/// Fields are private so that a record, once validated, cannot be mutated.
/// Use [`PeakRecordBuilder`] or [`PeakRecord::new`] to construct one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakRecord {
    sample_name: String,
    group_id: String,
    compound_id: String,
    rt: f64,
    peak_mz: f64,
    peak_intensity: f64,
    source: Source,
}

impl PeakRecord {
    /// Create a validated peak record.
    ///
    /// Fails when `rt` or `peak_mz` is not finite, or when `peak_intensity`
    /// is negative or NaN.
    pub fn new(
        sample_name: impl Into<String>,
        group_id: impl Into<String>,
        compound_id: impl Into<String>,
        rt: f64,
        peak_mz: f64,
        peak_intensity: f64,
        source: Source,
    ) -> Result<Self, PeakError> {
        if !rt.is_finite() {
            return Err(PeakError::NonFiniteValue { field: "rt", value: rt });
        }
        if !peak_mz.is_finite() {
            return Err(PeakError::NonFiniteValue {
                field: "peakMz",
                value: peak_mz,
            });
        }
        // `!(x >= 0.0)` also rejects NaN
        if !(peak_intensity >= 0.0) || peak_intensity.is_infinite() {
            return Err(PeakError::NegativeIntensity(peak_intensity));
        }

        Ok(Self {
            sample_name: sample_name.into(),
            group_id: group_id.into(),
            compound_id: compound_id.into(),
            rt,
            peak_mz,
            peak_intensity,
            source,
        })
    }

    /// Originating sample
    pub fn sample_name(&self) -> &str {
        &self.sample_name
    }

    /// Group identifier
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Compound identifier
    pub fn compound_id(&self) -> &str {
        &self.compound_id
    }

    /// Retention time
    pub fn rt(&self) -> f64 {
        self.rt
    }

    /// Mass-to-charge ratio
    pub fn peak_mz(&self) -> f64 {
        self.peak_mz
    }

    /// Peak intensity (always >= 0)
    pub fn peak_intensity(&self) -> f64 {
        self.peak_intensity
    }

    /// Curation that produced this record
    pub fn source(&self) -> Source {
        self.source
    }

    /// Scope this record is matched within
    pub fn scope(&self) -> ScopeKey {
        ScopeKey::new(self.group_id.clone(), self.compound_id.clone())
    }

    /// Unique identifier of the form `compound@sample`
    pub fn identifier(&self) -> String {
        format!("{}{}{}", self.compound_id, IDENTIFIER_SEPARATOR, self.sample_name)
    }

    /// Records pair only within the same sample of the same scope, i.e. on
    /// an equal `compound@sample` identifier and group
    pub(crate) fn can_pair_with(&self, other: &PeakRecord) -> bool {
        self.sample_name == other.sample_name
            && self.group_id == other.group_id
            && self.compound_id == other.compound_id
    }
}

/// Builder for [`PeakRecord`]
#[derive(Debug, Clone)]
pub struct PeakRecordBuilder {
    source: Source,
    sample_name: Option<String>,
    group_id: Option<String>,
    compound_id: Option<String>,
    rt: Option<f64>,
    peak_mz: Option<f64>,
    peak_intensity: f64,
}

impl PeakRecordBuilder {
    /// Start a record for the given curation source
    pub fn new(source: Source) -> Self {
        Self {
            source,
            sample_name: None,
            group_id: None,
            compound_id: None,
            rt: None,
            peak_mz: None,
            peak_intensity: 0.0,
        }
    }

    /// Shorthand for `PeakRecordBuilder::new(Source::Manual)`
    pub fn manual() -> Self {
        Self::new(Source::Manual)
    }

    /// Shorthand for `PeakRecordBuilder::new(Source::Automated)`
    pub fn automated() -> Self {
        Self::new(Source::Automated)
    }

    /// Set the sample name
    pub fn sample(mut self, name: impl Into<String>) -> Self {
        self.sample_name = Some(name.into());
        self
    }

    /// Set group and compound identifiers
    pub fn scope(mut self, group_id: impl Into<String>, compound_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self.compound_id = Some(compound_id.into());
        self
    }

    /// Set the retention time
    pub fn rt(mut self, rt: f64) -> Self {
        self.rt = Some(rt);
        self
    }

    /// Set the m/z
    pub fn mz(mut self, mz: f64) -> Self {
        self.peak_mz = Some(mz);
        self
    }

    /// Set the intensity (defaults to 0)
    pub fn intensity(mut self, intensity: f64) -> Self {
        self.peak_intensity = intensity;
        self
    }

    /// Validate and build the record
    pub fn build(self) -> Result<PeakRecord, PeakError> {
        PeakRecord::new(
            self.sample_name.ok_or(PeakError::MissingField("sampleName"))?,
            self.group_id.ok_or(PeakError::MissingField("groupId"))?,
            self.compound_id.ok_or(PeakError::MissingField("compoundId"))?,
            self.rt.ok_or(PeakError::MissingField("rt"))?,
            self.peak_mz.ok_or(PeakError::MissingField("peakMz"))?,
            self.peak_intensity,
            self.source,
        )
    }
}
