//! Shared data types for the scan pipeline.

use serde::Serialize;

/// A single key/value pair extracted from a `.strings` file.
///
/// Keys are not de-duplicated at parse time; a well-formed file has unique
/// keys, and consumers that index by key see the last occurrence win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationEntry {
    /// Path of the file this entry was parsed from.
    pub source_path: String,
    pub key: String,
    pub value: String,
}

impl LocalizationEntry {
    pub fn new(source_path: &str, key: String, value: String) -> Self {
        Self {
            source_path: source_path.to_string(),
            key,
            value,
        }
    }
}

/// Missing-key findings for one non-reference localization file.
///
/// `missing_keys` preserves reference-entry order, which in turn follows
/// the reference file's line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageReport {
    pub language_name: String,
    pub source_path: String,
    pub missing_keys: Vec<String>,
}

/// All per-language findings for one run, in file-discovery order.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub language_reports: Vec<LanguageReport>,
}

impl AggregateReport {
    pub fn missing_entries_count(&self) -> usize {
        self.language_reports
            .iter()
            .map(|report| report.missing_keys.len())
            .sum()
    }
}
