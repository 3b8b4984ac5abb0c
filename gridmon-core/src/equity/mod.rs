//! Equity subsector aggregation.
//!
//! A subsector arrives as a Capital IQ export (one row per company). Rows are
//! normalized through a fixed column dictionary, reduced to lower medians and
//! a summed market cap, and emitted as a [`SubsectorSummary`] with the same
//! shape as the curated fallback table.
//!
//! [`SubsectorSummary`]: crate::domain::SubsectorSummary

pub mod aggregate;
pub mod catalogue;
pub mod columns;
pub mod export;
pub mod fallback;

pub use aggregate::{pct_change, summarize_subsector, PLACEHOLDER_SPARK};
pub use catalogue::{Subsector, SUBSECTORS};
pub use columns::{CompanyRow, EquityField};
pub use export::{read_export, ExportError};
pub use fallback::fallback_table;
