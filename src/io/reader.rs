//! CSV file reader with iterator interface
//!
//! Provides an iterator over records from a CSV file. Delegates CSV format
//! concerns to the csv_format module.
//!
//! # Design
//!
//! The RecordReader loads the file, rejects malformed quoting anywhere in
//! it (header included), then wraps a csv::Reader configured to treat the
//! first row as a header, which is consumed and never validated. Each
//! following row is checked for field count and converted into a [`Record`].
//!
//! ```no_run
//! use record_sorter::io::reader::RecordReader;
//! use std::path::Path;
//!
//! let reader = RecordReader::new(Path::new("people.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Read record: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors, bad quoting) are returned from `new()`
//! - Row errors are yielded as Err variants in the iterator
//! - [`read_records`] stops at the first error and returns no records

use crate::io::csv_format::{check_quoting, convert_csv_record, CsvRecord};
use crate::types::{Record, SortError};
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

/// CSV record reader
///
/// Yields records in file order, skipping the header row.
#[derive(Debug)]
pub struct RecordReader {
    reader: csv::Reader<Cursor<Vec<u8>>>,
    row: StringRecord,
}

impl RecordReader {
    /// Create a new RecordReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Consume the first row as a header
    /// - Reject rows whose field count differs from the header
    /// - Keep fields untrimmed
    ///
    /// # Returns
    ///
    /// * `Ok(RecordReader)` if file was read and is well quoted
    /// * `Err(SortError::FileNotFound)` if the path does not exist
    /// * `Err(SortError::IoError)` for any other read failure
    /// * `Err(SortError::ParseError)` for a stray or unterminated quote
    pub fn new(path: &Path) -> Result<Self, SortError> {
        let contents = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SortError::file_not_found(&path.display().to_string()),
            _ => SortError::IoError {
                message: format!("Failed to read file '{}': {}", path.display(), e),
            },
        })?;
        debug!("read {} bytes from {}", contents.len(), path.display());

        check_quoting(&contents)?;

        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .buffer_capacity(8 * 1024)
            .from_reader(Cursor::new(contents));

        Ok(Self {
            reader,
            row: StringRecord::new(),
        })
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record, SortError>;

    /// Get the next record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Record))` - Successfully parsed record
    /// * `Some(Err(SortError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => {
                let line = self.row.position().map(|pos| pos.line()).unwrap_or_default();
                Some(CsvRecord::from_row(&self.row, line).and_then(|csv_record| {
                    convert_csv_record(csv_record, line)
                }))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Read every record from a CSV file
///
/// All or nothing: the first malformed row aborts the read and no records
/// are returned. A file holding only a header yields an empty vector.
pub fn read_records(path: &Path) -> Result<Vec<Record>, SortError> {
    let records = RecordReader::new(path)?.collect::<Result<Vec<_>, _>>()?;
    debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}
