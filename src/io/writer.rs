//! File writer for sorted records
//!
//! Creates (or truncates) the destination and hands the records to
//! [`write_records_csv`]. There is no temp-file swap: a failure part way
//! through leaves a partially written file behind.

use crate::io::csv_format::write_records_csv;
use crate::types::{Record, SortError};
use log::debug;
use std::fs::File;
use std::path::Path;

/// Write records to a CSV file at `path`
///
/// The header row comes first, then one row per record in slice order.
/// Output is buffered by the csv writer, which flushes before returning.
/// The file is closed when the handle drops.
///
/// # Returns
///
/// * `Ok(())` if the file was fully written
/// * `Err(SortError::IoError)` if the file could not be created or written
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), SortError> {
    let mut file = File::create(path).map_err(|e| SortError::IoError {
        message: format!("Failed to create file '{}': {}", path.display(), e),
    })?;
    debug!("created output file {}", path.display());

    write_records_csv(records, &mut file)?;

    debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
