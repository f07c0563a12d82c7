//! Schema definitions for declarative evaluation configuration

use crate::eval::classification::{LabelOrder, DEFAULT_DECIMAL};
use serde::{Deserialize, Serialize};

/// Evaluation settings
///
/// Every field has a default, so a config file only names what it overrides.
///
/// ```yaml
/// decimal: 3
/// label_order: first-seen
/// csv:
///   delimiter: ";"
///   drop_last_column: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Digits kept when metrics are rounded for reporting
    pub decimal: u32,

    /// How the label universe is ordered
    pub label_order: LabelOrder,

    /// Delimited-file input settings
    pub csv: CsvConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { decimal: DEFAULT_DECIMAL, label_order: LabelOrder::default(), csv: CsvConfig::default() }
    }
}

/// Layout of the two-row label file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field separator
    pub delimiter: char,

    /// Discard the final field of each row (files exported with a trailing separator)
    pub drop_last_column: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { delimiter: ',', drop_last_column: true }
    }
}
