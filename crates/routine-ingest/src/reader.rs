//! CSV reader producing [`FlatRecord`] rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use routine_model::FlatRecord;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::header::inspect_header;

/// Read every row of a CSV file.
///
/// # Errors
///
/// Fails if the file cannot be opened, has no header row, names a known
/// column twice, or contains a row that cannot be decoded (wrong field
/// count, invalid boolean cell).
pub fn read_records(path: &Path) -> Result<Vec<FlatRecord>> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_records_from(file, path)
}

/// Read every row from an arbitrary reader.
///
/// `source` only labels errors and log events.
pub fn read_records_from<R: Read>(input: R, source: &Path) -> Result<Vec<FlatRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|error| IngestError::Header {
            path: source.to_path_buf(),
            message: error.to_string(),
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyInput {
            path: source.to_path_buf(),
        });
    }

    let report = inspect_header(&headers);
    if !report.duplicates.is_empty() {
        return Err(IngestError::Header {
            path: source.to_path_buf(),
            message: format!("duplicate columns: {}", report.duplicates.join(", ")),
        });
    }
    if !report.has_known_columns() {
        warn!(
            source = %source.display(),
            "header names none of the expected columns; every row will decode to empty values"
        );
    }
    if !report.unknown.is_empty() {
        warn!(
            source = %source.display(),
            columns = ?report.unknown,
            "ignoring unknown columns"
        );
    }
    if !report.missing.is_empty() {
        debug!(
            source = %source.display(),
            columns = ?report.missing,
            "columns absent from header default to empty"
        );
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<FlatRecord>().enumerate() {
        let record = row.map_err(|error| IngestError::Decode {
            path: source.to_path_buf(),
            // Header occupies line 1.
            line: error
                .position()
                .map_or(index as u64 + 2, csv::Position::line),
            message: error.to_string(),
        })?;
        records.push(record);
    }

    debug!(
        source = %source.display(),
        record_count = records.len(),
        "decoded records"
    );
    Ok(records)
}
