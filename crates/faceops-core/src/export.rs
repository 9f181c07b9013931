//! CSV export of flattened match-log records.

use crate::types::MatchLogRecord;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Empty input is a failure by policy: we never write a header-only file.
    #[error("no match logs to export")]
    NoRecords,
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Write records to `path` with a header row, one row per record in input
/// order. An existing file is truncated. Returns the number of rows written.
///
/// Empty input fails with [`ExportError::NoRecords`] before the file is
/// created or touched.
pub fn write_csv(path: &Path, records: &[MatchLogRecord]) -> Result<usize, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    debug!(rows = records.len(), path = %path.display(), "wrote match log export");
    Ok(records.len())
}
