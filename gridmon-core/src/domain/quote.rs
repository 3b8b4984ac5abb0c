use serde::{Deserialize, Serialize};

use crate::format::NOT_AVAILABLE;

/// One displayed commodity or power price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub name: String,
    /// Display string including the currency prefix, or `"N/A"`.
    pub value: String,
    pub unit: String,
    /// Signed daily change, rounded to two decimals.
    pub change_pct: f64,
    pub up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl PriceQuote {
    /// Placeholder for a symbol whose quote could not be obtained.
    pub fn unavailable(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            value: NOT_AVAILABLE.to_string(),
            unit: unit.to_string(),
            change_pct: 0.0,
            up: true,
            source: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.value != NOT_AVAILABLE
    }
}
