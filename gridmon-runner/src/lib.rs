//! GRID Monitor runner: the ingestion and conversion runs on top of
//! `gridmon-core`.
//!
//! - Config file loading (credentials, pacing, timeout)
//! - Snapshot assembly with per-source fallbacks
//! - Capital IQ export conversion into the equity cache
//! - Atomic JSON persistence
//! - Console progress reporting

pub mod config;
pub mod convert;
pub mod export;
pub mod ingest;
pub mod progress;

pub use config::{ConfigError, IngestConfig, DEFAULT_TIMEOUT_SECS};
pub use convert::{convert_folder, run_convert, ConvertReport, DEFAULT_FOLDER};
pub use export::{read_equity_cache, write_json};
pub use ingest::{
    assemble_snapshot, format_as_of, format_last_updated, load_equity, run_ingest, IngestPaths,
    IngestReport, DEFAULT_EQUITY_CACHE, DEFAULT_OUTPUT,
};
pub use progress::{
    ConvertProgress, EquitySource, IngestProgress, IngestStep, SilentProgress, StdoutProgress,
};
