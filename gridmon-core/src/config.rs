//! Runtime settings handed to every collector by parameter.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::transport::Pacer;

/// API credentials, treated as opaque strings. Absent keys deserialize as
/// empty so the loader can report which one is missing.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub alpha_vantage_key: String,
    pub eia_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("alpha_vantage_key", &"***")
            .field("eia_key", &"***")
            .finish()
    }
}

/// Minimum inter-call spacing per upstream, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    pub quote_ms: u64,
    pub grid_ms: u64,
    pub feed_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            quote_ms: 1000,
            grid_ms: 500,
            feed_ms: 500,
        }
    }
}

impl Pacing {
    /// No spacing at all. For tests and canned transports.
    pub fn none() -> Self {
        Self {
            quote_ms: 0,
            grid_ms: 0,
            feed_ms: 0,
        }
    }

    pub fn quotes(&self) -> Pacer {
        Pacer::new(Duration::from_millis(self.quote_ms))
    }

    pub fn grid(&self) -> Pacer {
        Pacer::new(Duration::from_millis(self.grid_ms))
    }

    pub fn feeds(&self) -> Pacer {
        Pacer::new(Duration::from_millis(self.feed_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_keys() {
        let creds = Credentials {
            alpha_vantage_key: "AVKEY".into(),
            eia_key: "EIAKEY".into(),
        };
        let shown = format!("{creds:?}");
        assert!(!shown.contains("AVKEY"));
        assert!(!shown.contains("EIAKEY"));
    }

    #[test]
    fn pacing_defaults_and_partial_override() {
        let p: Pacing = serde_json::from_str(r#"{"grid_ms": 250}"#).unwrap();
        assert_eq!(p.quote_ms, 1000);
        assert_eq!(p.grid_ms, 250);
        assert_eq!(p.feeds().delay(), Duration::from_millis(500));
    }
}
