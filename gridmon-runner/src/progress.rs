//! Operator-facing progress output for the two runs.
//!
//! Runs report through these traits instead of printing, so tests can stay
//! silent with [`SilentProgress`].

use std::path::Path;

use gridmon_core::domain::SubsectorSummary;

/// Collection steps of an ingestion run, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStep {
    Prices,
    Grid,
    Signals,
    Commentary,
    Equity,
}

impl IngestStep {
    /// Step label as shown in the banner line.
    pub fn banner(self) -> &'static str {
        match self {
            Self::Prices => "[1/4] Fetching commodity prices...",
            Self::Grid => "[2/4] Fetching EIA grid status...",
            Self::Signals => "[3/4] Fetching signal feed (RSS)...",
            Self::Commentary => "[4/4] Fetching commentary feed...",
            Self::Equity => "[+] Loading equity data...",
        }
    }

    /// What the step's count measures.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Prices => "price entries",
            Self::Grid => "regions",
            Self::Signals => "signal items",
            Self::Commentary => "commentary items",
            Self::Equity => "subsectors",
        }
    }
}

/// Where the equity section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquitySource<'a> {
    Cache(&'a Path),
    Fallback,
}

pub trait IngestProgress {
    fn on_run_start(&self, started: &str);

    fn on_step_start(&self, step: IngestStep);

    fn on_step_complete(&self, step: IngestStep, count: usize);

    fn on_equity_source(&self, source: EquitySource<'_>);

    fn on_written(&self, path: &Path, bytes: usize, finished: &str);
}

pub trait ConvertProgress {
    fn on_skip(&self, file: &str);

    fn on_processing(&self, file: &str);

    /// The export parsed but held no usable company rows.
    fn on_empty(&self, file: &str);

    fn on_summary(&self, summary: &SubsectorSummary);

    fn on_written(&self, path: &Path, count: usize);
}

/// Prints progress to stdout.
pub struct StdoutProgress;

impl IngestProgress for StdoutProgress {
    fn on_run_start(&self, started: &str) {
        let rule = "=".repeat(60);
        println!("\n{rule}");
        println!("GRID Monitor - Ingestion run at {started}");
        println!("{rule}");
    }

    fn on_step_start(&self, step: IngestStep) {
        println!("\n{}", step.banner());
    }

    fn on_step_complete(&self, step: IngestStep, count: usize) {
        println!("  Got {count} {}", step.unit());
    }

    fn on_equity_source(&self, source: EquitySource<'_>) {
        match source {
            EquitySource::Cache(path) => {
                println!("  Loading Cap IQ data from {}", path.display())
            }
            EquitySource::Fallback => {
                println!("  No Cap IQ data found, using placeholder equity data")
            }
        }
    }

    fn on_written(&self, path: &Path, bytes: usize, finished: &str) {
        println!("\n✓ {} written, {bytes} bytes", path.display());
        println!("✓ Done at {finished}\n");
    }
}

impl ConvertProgress for StdoutProgress {
    fn on_skip(&self, file: &str) {
        println!("  SKIP: {file} not found");
    }

    fn on_processing(&self, file: &str) {
        println!("  Processing {file}...");
    }

    fn on_empty(&self, file: &str) {
        println!("  WARNING: No data rows in {file}");
    }

    fn on_summary(&self, s: &SubsectorSummary) {
        println!(
            "    → {}: {}, {} companies, P/E {}",
            s.name, s.mktcap, s.n_companies, s.pe
        );
    }

    fn on_written(&self, path: &Path, count: usize) {
        println!("\n✓ Wrote {count} subsectors to {}", path.display());
    }
}

/// Reports nothing.
pub struct SilentProgress;

impl IngestProgress for SilentProgress {
    fn on_run_start(&self, _started: &str) {}
    fn on_step_start(&self, _step: IngestStep) {}
    fn on_step_complete(&self, _step: IngestStep, _count: usize) {}
    fn on_equity_source(&self, _source: EquitySource<'_>) {}
    fn on_written(&self, _path: &Path, _bytes: usize, _finished: &str) {}
}

impl ConvertProgress for SilentProgress {
    fn on_skip(&self, _file: &str) {}
    fn on_processing(&self, _file: &str) {}
    fn on_empty(&self, _file: &str) {}
    fn on_summary(&self, _summary: &SubsectorSummary) {}
    fn on_written(&self, _path: &Path, _count: usize) {}
}
