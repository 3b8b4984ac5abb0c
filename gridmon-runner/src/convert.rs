//! The conversion run: Capital IQ exports to the equity cache document.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::Local;
use gridmon_core::domain::SubsectorSummary;
use gridmon_core::equity::{read_export, summarize_subsector, SUBSECTORS};
use tracing::warn;

use crate::export::write_json;
use crate::ingest::format_as_of;
use crate::progress::ConvertProgress;

pub const DEFAULT_FOLDER: &str = "capiq_exports";

/// Result of a completed conversion.
#[derive(Debug)]
pub struct ConvertReport {
    pub summaries: Vec<SubsectorSummary>,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summarize every catalogued subsector whose export is present in `folder`.
///
/// Missing files are skipped; unreadable or empty exports are skipped with a
/// warning. Only a missing folder is an error.
pub fn convert_folder(
    folder: &Path,
    as_of: &str,
    progress: &dyn ConvertProgress,
) -> Result<Vec<SubsectorSummary>> {
    if !folder.is_dir() {
        bail!("Folder not found: {}", folder.display());
    }

    let mut summaries = Vec::new();
    for subsector in SUBSECTORS {
        let path = folder.join(subsector.file);
        if !path.exists() {
            progress.on_skip(subsector.file);
            continue;
        }
        progress.on_processing(subsector.file);

        let rows = match read_export(&path) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(file = subsector.file, error = %e, "unreadable export, skipping");
                continue;
            }
        };
        match summarize_subsector(subsector, &rows, as_of) {
            Some(summary) => {
                progress.on_summary(&summary);
                summaries.push(summary);
            }
            None => {
                warn!(file = subsector.file, "no data rows, skipping");
                progress.on_empty(subsector.file);
            }
        }
    }
    Ok(summaries)
}

/// Convert `folder` and write the resulting list, even when empty, to `out`.
pub fn run_convert(
    folder: &Path,
    out: &Path,
    progress: &dyn ConvertProgress,
) -> Result<ConvertReport> {
    let as_of = format_as_of(&Local::now());
    let summaries = convert_folder(folder, &as_of, progress)?;
    let bytes = write_json(out, &summaries)?;
    progress.on_written(out, summaries.len());

    Ok(ConvertReport {
        summaries,
        path: out.to_path_buf(),
        bytes,
    })
}
