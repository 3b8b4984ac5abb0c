use serde::{Deserialize, Serialize};

/// Where a subsector summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Aggregated from a Capital IQ tabular export.
    Capiq,
    /// Curated fallback table.
    Static,
}

/// Formatted values for the three reporting windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRow {
    pub ytd: String,
    pub y1: String,
    pub y3: String,
}

impl PeriodRow {
    pub fn new(ytd: impl Into<String>, y1: impl Into<String>, y3: impl Into<String>) -> Self {
        Self {
            ytd: ytd.into(),
            y1: y1.into(),
            y3: y3.into(),
        }
    }
}

/// Price change, EPS revision and multiple changes per window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTable {
    pub price: PeriodRow,
    pub eps: PeriodRow,
    pub pe: PeriodRow,
    pub ev: PeriodRow,
}

/// Aggregated view of one equity subsector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsectorSummary {
    pub name: String,
    /// Classification label, with `" · N cos"` appended on the export path.
    pub sub: String,
    pub mktcap: String,
    /// Current forward P/E, unsigned (`"12.0x"`).
    pub pe: String,
    pub data: PeriodTable,
    pub spark: Vec<u32>,
    pub source: Provenance,
    pub as_of: String,
    pub n_companies: usize,
}
