//! GRID Monitor core: normalization, classification and aggregation of the
//! external sources behind the energy dashboard snapshot.
//!
//! - Display formatting with a uniform `"N/A"` fail-safe
//! - Lower-median and capitalization totals over raw rows
//! - Equity subsector summaries from Capital IQ exports, with a curated fallback
//! - Grid-status tiers from demand/peak ratios
//! - Headline classification, tagging and cross-feed deduplication
//!
//! Network access goes through the [`transport::Transport`] seam so every
//! collector can run against canned responses.

pub mod config;
pub mod domain;
pub mod equity;
pub mod format;
pub mod grid;
pub mod prices;
pub mod signals;
pub mod stats;
pub mod transport;
