use serde::{Deserialize, Serialize};

use super::{CommentaryItem, GridRegion, PriceQuote, SignalItem, SubsectorSummary};

/// The complete dashboard document written once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// `"DD Mon YYYY · HH:MM UTC"`.
    pub last_updated: String,
    pub prices: Vec<PriceQuote>,
    pub grid: Vec<GridRegion>,
    pub signals: Vec<SignalItem>,
    pub commentary: Vec<CommentaryItem>,
    pub equity: Vec<SubsectorSummary>,
}
