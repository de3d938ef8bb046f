//! # Method Settings Comparison
//!
//! Both curations should have been produced from the same method file. This
//! module loads the peak detection settings of each dataset and lists the
//! keys whose values disagree.
//!
//! Method files are TOML. Settings are read from the `[PeakDetectionSettings]`
//! table, falling back to `[Settings]` and then to the whole document. Nested
//! tables are flattened to dotted keys.
//!
//! ```rust
//! use mzcompare::settings::MethodSettings;
//!
//! let manual = MethodSettings::from_toml_str("[PeakDetectionSettings]\nmin_snr = 3\n")?;
//! let automated = MethodSettings::from_toml_str("[PeakDetectionSettings]\nmin_snr = 5\n")?;
//!
//! let diff = manual.diff(&automated);
//! assert_eq!(diff.changes.len(), 1);
//! assert_eq!(diff.changes[0].key, "min_snr");
//! # Ok::<(), mzcompare::settings::SettingsError>(())
//! ```

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::labels::{NO_SETTINGS_DIFFERENCE, PEAK_DETECTION_SETTINGS, SETTINGS};

/// Errors that can occur while loading method settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// I/O error reading a method file
    #[error("Failed to read method file: {0}")]
    IoError(#[from] std::io::Error),

    /// Method file is not valid TOML
    #[error("Invalid method file: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Flattened `key -> value` peak detection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodSettings {
    entries: BTreeMap<String, String>,
}

/// One key that differs between two method files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingChange {
    /// Flattened setting key
    pub key: String,
    /// Value in the manual dataset's method file
    pub manual: Option<String>,
    /// Value in the automated dataset's method file
    pub automated: Option<String>,
}

/// Differences between two method files, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsDiff {
    /// Differing keys
    pub changes: Vec<SettingChange>,
}

impl SettingsDiff {
    /// True when both method files agree
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl fmt::Display for SettingsDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return writeln!(f, "{}", NO_SETTINGS_DIFFERENCE);
        }
        for change in &self.changes {
            writeln!(
                f,
                "  {}: manual={} automated={}",
                change.key,
                change.manual.as_deref().unwrap_or("<missing>"),
                change.automated.as_deref().unwrap_or("<missing>")
            )?;
        }
        Ok(())
    }
}

impl MethodSettings {
    /// Load settings from a TOML method file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let document: toml::Table = content.parse()?;

        let table = [PEAK_DETECTION_SETTINGS, SETTINGS]
            .iter()
            .find_map(|name| document.get(*name).and_then(toml::Value::as_table))
            .unwrap_or(&document);

        let mut entries = BTreeMap::new();
        flatten("", table, &mut entries);
        Ok(Self { entries })
    }

    /// Build settings from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Look up a flattened key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no settings were found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys whose values differ or exist on one side only.
    ///
    /// `self` is the manual dataset's method file.
    pub fn diff(&self, automated: &MethodSettings) -> SettingsDiff {
        let mut keys: Vec<&String> = self.entries.keys().chain(automated.entries.keys()).collect();
        keys.sort();
        keys.dedup();

        let changes = keys
            .into_iter()
            .filter_map(|key| {
                let manual = self.entries.get(key);
                let auto = automated.entries.get(key);
                (manual != auto).then(|| SettingChange {
                    key: key.clone(),
                    manual: manual.cloned(),
                    automated: auto.cloned(),
                })
            })
            .collect();

        SettingsDiff { changes }
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::Table(nested) => flatten(&full_key, nested, out),
            toml::Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            other => {
                out.insert(full_key, other.to_string());
            }
        }
    }
}
