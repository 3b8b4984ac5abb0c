//! GRID Monitor CLI: snapshot ingestion and Capital IQ conversion.
//!
//! Commands:
//! - `ingest`: collect prices, grid status, signals, commentary and equity
//!   data into the dashboard snapshot
//! - `convert`: turn a folder of Capital IQ CSV exports into the equity cache

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridmon_core::transport::{HttpTransport, OfflineTransport, Transport};
use gridmon_runner::{
    run_convert, run_ingest, IngestConfig, IngestPaths, StdoutProgress, DEFAULT_EQUITY_CACHE,
    DEFAULT_FOLDER, DEFAULT_OUTPUT,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridmon", about = "GRID Monitor data pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every source and write the dashboard snapshot.
    Ingest {
        /// Config file with API credentials (.json or .toml).
        #[arg(long)]
        config: PathBuf,

        /// Snapshot output path.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,

        /// Converted equity document, used instead of the static table when present.
        #[arg(long, default_value = DEFAULT_EQUITY_CACHE)]
        equity_cache: PathBuf,

        /// Offline mode: no network access, every source falls back.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Log collector activity at info level.
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },
    /// Convert Capital IQ CSV exports into the equity cache.
    Convert {
        /// Folder containing the CSV exports.
        #[arg(long, default_value = DEFAULT_FOLDER)]
        folder: PathBuf,

        /// Output path for the converted subsector list.
        #[arg(long, default_value = DEFAULT_EQUITY_CACHE)]
        out: PathBuf,

        /// Log conversion activity at info level.
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest {
            config,
            out,
            equity_cache,
            offline,
            verbose,
        } => {
            init_logging(verbose);
            run_ingest_cmd(&config, out, equity_cache, offline)
        }
        Commands::Convert {
            folder,
            out,
            verbose,
        } => {
            init_logging(verbose);
            info!(folder = %folder.display(), "converting exports");
            run_convert(&folder, &out, &StdoutProgress).map(|_| ())
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_ingest_cmd(config: &Path, out: PathBuf, equity_cache: PathBuf, offline: bool) -> Result<()> {
    let config = IngestConfig::from_file(config)
        .with_context(|| format!("cannot load config {}", config.display()))?;

    let transport: Box<dyn Transport> = if offline {
        warn!("offline mode: every live source will fall back");
        Box::new(OfflineTransport)
    } else {
        info!(timeout_secs = config.timeout_secs, "using HTTP transport");
        Box::new(HttpTransport::new(config.timeout()).context("cannot start HTTP client")?)
    };

    let paths = IngestPaths { out, equity_cache };
    run_ingest(transport.as_ref(), &config, &paths, &StdoutProgress)?;
    Ok(())
}
