//! JSON persistence for the snapshot and the equity cache.
//!
//! Documents are overwritten wholesale on every run. Writes go to a sibling
//! `.tmp` file that is then renamed into place, so readers never see a
//! half-written document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gridmon_core::domain::SubsectorSummary;
use serde::Serialize;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `value` as pretty JSON, creating the parent directory. Returns the
/// number of bytes written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value).context("failed to serialize document")?;
    let tmp = temp_path(path);
    fs::write(&tmp, &json).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to move {} into place", path.display()));
    }
    Ok(json.len())
}

/// Load a converted equity document.
///
/// `Ok(None)` when the file does not exist; an error when it exists but is
/// unreadable or is not a list of subsector summaries.
pub fn read_equity_cache(path: &Path) -> Result<Option<Vec<SubsectorSummary>>> {
    if !path.exists() {
        return Ok(None);
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let summaries = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a subsector list", path.display()))?;
    Ok(Some(summaries))
}
