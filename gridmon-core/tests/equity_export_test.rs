//! Capital IQ export files through to subsector summaries.

use std::io::Write;
use std::path::PathBuf;

use gridmon_core::domain::{PeriodRow, Provenance};
use gridmon_core::equity::{
    fallback_table, read_export, summarize_subsector, ExportError, SUBSECTORS,
};

const HEADER: &str = "Company Name,Market Capitalization,P/E (NTM),\"P/E (NTM, 52 Weeks Prior)\",\
    EV/EBITDA (NTM),\"EV/EBITDA (NTM, 52 Weeks Prior)\",EPS (NTM Mean Estimate),\
    \"EPS (NTM Mean, 13 Weeks Prior)\",\"EPS (NTM Mean, 52 Weeks Prior)\",\
    Price % Change (YTD),Price % Change (1 Year),Price % Change (3 Year)";

const ROWS: &[&str] = &[
    "Alpha Energy,\"1,200,000\",12,10,8,7,5.5,5.0,4.4,3.1,12.4,40.2",
    "Beta Resources,\"600,000\",14,11,9,7.5,2.2,2.0,2.0,-1.2,8.0,22.0",
    "Gamma Petroleum,n/a,,9,10,8,3.3,3.0,2.5,0.5,15.8,30.6",
    "Source: S&P Capital IQ",
];

fn write_export(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

#[test]
fn export_file_to_summary() {
    let dir = tempfile::tempdir().unwrap();
    let mut lines = vec![HEADER];
    lines.extend_from_slice(ROWS);
    let path = write_export(&dir, "grid_ep.csv", &lines);

    let rows = read_export(&path).unwrap();
    // the footer carries no recognized value
    assert_eq!(rows.len(), 3);

    let summary = summarize_subsector(&SUBSECTORS[0], &rows, "05 Jan 2026 09:15").unwrap();
    assert_eq!(summary.name, "Oil E&P");
    assert_eq!(summary.sub, "Upstream · GICS 10102010 · 3 cos");
    assert_eq!(summary.mktcap, "$1.80T");
    assert_eq!(summary.pe, "12.0x");
    assert_eq!(summary.data.price, PeriodRow::new("+0.5%", "+12.4%", "+30.6%"));
    assert_eq!(summary.data.eps, PeriodRow::new("+10.0%", "+32.0%", "N/A"));
    assert_eq!(summary.data.pe, PeriodRow::new("+0.5x", "+2.0x", "N/A"));
    assert_eq!(summary.data.ev, PeriodRow::new("+0.4x", "+1.5x", "N/A"));
    assert_eq!(summary.spark, vec![50; 7]);
    assert_eq!(summary.source, Provenance::Capiq);
    assert_eq!(summary.as_of, "05 Jan 2026 09:15");
    assert_eq!(summary.n_companies, 3);
}

#[test]
fn header_only_export_yields_no_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(&dir, "grid_lng.csv", &[HEADER]);
    let rows = read_export(&path).unwrap();
    assert!(rows.is_empty());
    assert!(summarize_subsector(&SUBSECTORS[2], &rows, "now").is_none());
}

#[test]
fn missing_export_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_export(&dir.path().join("grid_ev.csv")).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(err.to_string().contains("grid_ev.csv"));
}

#[test]
fn converted_and_fallback_share_one_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut lines = vec![HEADER];
    lines.extend_from_slice(ROWS);
    let path = write_export(&dir, "grid_ep.csv", &lines);
    let rows = read_export(&path).unwrap();

    let converted = summarize_subsector(&SUBSECTORS[0], &rows, "t").unwrap();
    let fallback = &fallback_table("t")[0];

    let keys = |v: serde_json::Value| -> Vec<String> {
        v.as_object().unwrap().keys().cloned().collect()
    };
    assert_eq!(
        keys(serde_json::to_value(&converted).unwrap()),
        keys(serde_json::to_value(fallback).unwrap())
    );
}
