//! Reading a Capital IQ CSV export.

use std::path::Path;

use thiserror::Error;

use super::columns::CompanyRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Read and normalize every company row of an export file.
pub fn read_export(path: &Path) -> Result<Vec<CompanyRow>, ExportError> {
    let bytes = std::fs::read(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_export(&bytes).map_err(|source| ExportError::Csv {
        path: path.display().to_string(),
        source,
    })
}

/// Normalize an in-memory export. A leading UTF-8 byte-order mark is
/// skipped; invalid UTF-8 in cells is replaced rather than rejected.
pub fn parse_export(bytes: &[u8]) -> Result<Vec<CompanyRow>, csv::Error> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let values: Vec<String> = record
            .iter()
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .collect();
        if let Some(row) = CompanyRow::from_record(
            headers.iter().map(String::as_str),
            values.iter().map(String::as_str),
        ) {
            rows.push(row);
        }
    }
    Ok(rows)
}
