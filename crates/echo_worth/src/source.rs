//! Reads the preset table from delimited text into [`RawRecord`]s.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::catalog::{PresetCatalog, RawRecord};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("preset data unavailable: {reason}")]
    DataUnavailable { reason: String },
}

impl SourceError {
    fn unavailable(reason: impl Into<String>) -> Self {
        SourceError::DataUnavailable {
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        SourceError::unavailable(err.to_string())
    }
}

/// Tokenizes CSV text with a header row.
///
/// Cells are trimmed. A row shorter than the header leaves the remaining
/// columns out of its record; extra trailing cells are dropped. A row that
/// cannot be decoded is skipped with a warning; only header and I/O failures
/// make the whole source unavailable.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(SourceError::unavailable("missing header row"));
    }

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let row = match result {
            Ok(bytes) => {
                let line = bytes.position().map(|pos| pos.line());
                match csv::StringRecord::from_byte_record(bytes) {
                    Ok(row) => row,
                    Err(err) => {
                        warn!(line, "skipping undecodable preset row: {err}");
                        continue;
                    }
                }
            }
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!("skipping unreadable preset row: {err}");
                continue;
            }
        };
        if row.iter().all(str::is_empty) {
            continue;
        }
        let record: RawRecord = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    if records.is_empty() {
        return Err(SourceError::unavailable("no preset rows"));
    }
    debug!(records = records.len(), columns = headers.len(), "read preset records");
    Ok(records)
}

pub fn read_records_from_str(text: &str) -> Result<Vec<RawRecord>, SourceError> {
    read_records(text.as_bytes())
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<RawRecord>, SourceError> {
    let file = std::fs::File::open(path)
        .map_err(|err| SourceError::unavailable(format!("{}: {err}", path.display())))?;
    read_records(file)
}

/// Loads the catalog at `path`, or an empty catalog when the data is unavailable.
pub fn load_catalog_or_empty(path: &Path) -> PresetCatalog {
    match read_records_from_path(path) {
        Ok(records) => PresetCatalog::from_records(records),
        Err(err) => {
            error!("{err}");
            PresetCatalog::new()
        }
    }
}
