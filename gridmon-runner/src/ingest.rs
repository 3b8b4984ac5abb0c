//! The ingestion run: every collector in turn, merged into one snapshot.
//!
//! Collectors never fail the run. Each degrades to its own fallback data,
//! so the only errors surfacing here come from writing the document.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use gridmon_core::domain::{Snapshot, SubsectorSummary};
use gridmon_core::equity::fallback_table;
use gridmon_core::grid::collect_grid;
use gridmon_core::prices::collect_prices;
use gridmon_core::signals::{collect_commentary, collect_signals};
use gridmon_core::transport::Transport;
use tracing::{info, warn};

use crate::config::IngestConfig;
use crate::export::{read_equity_cache, write_json};
use crate::progress::{EquitySource, IngestProgress, IngestStep};

pub const DEFAULT_OUTPUT: &str = "data/live.json";
pub const DEFAULT_EQUITY_CACHE: &str = "data/capiq.json";

/// `"05 Jan 2026 · 14:30 UTC"`.
pub fn format_last_updated(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y · %H:%M UTC").to_string()
}

/// Stamp used for `as_of` on subsector summaries.
pub fn format_as_of<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d %b %Y %H:%M").to_string()
}

/// Output locations for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestPaths {
    pub out: PathBuf,
    pub equity_cache: PathBuf,
}

impl Default for IngestPaths {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUTPUT),
            equity_cache: PathBuf::from(DEFAULT_EQUITY_CACHE),
        }
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct IngestReport {
    pub snapshot: Snapshot,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Converted equity data if a readable cache exists, otherwise the curated
/// fallback table stamped with `as_of`.
pub fn load_equity(
    cache: &Path,
    as_of: &str,
    progress: &dyn IngestProgress,
) -> Vec<SubsectorSummary> {
    match read_equity_cache(cache) {
        Ok(Some(summaries)) => {
            progress.on_equity_source(EquitySource::Cache(cache));
            return summaries;
        }
        Ok(None) => {}
        Err(e) => {
            let reason = format!("{e:#}");
            warn!(path = %cache.display(), error = %reason, "ignoring equity cache");
        }
    }
    info!("using static equity table");
    progress.on_equity_source(EquitySource::Fallback);
    fallback_table(as_of)
}

/// Run every collector and merge the results, without writing anything.
pub fn assemble_snapshot(
    transport: &dyn Transport,
    config: &IngestConfig,
    equity_cache: &Path,
    now: DateTime<Utc>,
    progress: &dyn IngestProgress,
) -> Snapshot {
    let creds = &config.credentials;

    progress.on_step_start(IngestStep::Prices);
    let prices = collect_prices(transport, creds, &config.pacing.quotes());
    progress.on_step_complete(IngestStep::Prices, prices.len());

    progress.on_step_start(IngestStep::Grid);
    let grid = collect_grid(transport, creds, &config.pacing.grid());
    progress.on_step_complete(IngestStep::Grid, grid.len());

    progress.on_step_start(IngestStep::Signals);
    let signals = collect_signals(transport, &config.pacing.feeds());
    progress.on_step_complete(IngestStep::Signals, signals.len());

    progress.on_step_start(IngestStep::Commentary);
    let commentary = collect_commentary(transport, &config.pacing.feeds());
    progress.on_step_complete(IngestStep::Commentary, commentary.len());

    progress.on_step_start(IngestStep::Equity);
    let equity = load_equity(equity_cache, &format_as_of(&now), progress);
    progress.on_step_complete(IngestStep::Equity, equity.len());

    Snapshot {
        last_updated: format_last_updated(now),
        prices,
        grid,
        signals,
        commentary,
        equity,
    }
}

/// Assemble a snapshot and write it to `paths.out`.
pub fn run_ingest(
    transport: &dyn Transport,
    config: &IngestConfig,
    paths: &IngestPaths,
    progress: &dyn IngestProgress,
) -> Result<IngestReport> {
    let started = Utc::now();
    progress.on_run_start(&format_last_updated(started));

    let snapshot = assemble_snapshot(transport, config, &paths.equity_cache, started, progress);
    let bytes = write_json(&paths.out, &snapshot)?;
    info!(path = %paths.out.display(), bytes, "snapshot written");
    progress.on_written(&paths.out, bytes, &format_last_updated(Utc::now()));

    Ok(IngestReport {
        snapshot,
        path: paths.out.clone(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn last_updated_format() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 59).unwrap();
        assert_eq!(format_last_updated(at), "05 Jan 2026 · 14:30 UTC");
        assert_eq!(format_as_of(&at), "05 Jan 2026 14:30");
    }

    proptest! {
        #[test]
        fn last_updated_has_fixed_shape(secs in 0i64..4_102_444_800) {
            let at = Utc.timestamp_opt(secs, 0).unwrap();
            let text = format_last_updated(at);
            // "DD Mon YYYY · HH:MM UTC"
            prop_assert_eq!(text.chars().count(), 23);
            prop_assert!(text.ends_with(" UTC"));
            prop_assert_eq!(text.chars().nth(12), Some('·'));
        }
    }
}
