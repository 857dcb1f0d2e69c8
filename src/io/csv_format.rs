//! CSV format handling for records
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for positional deserialization
//! - Quote-structure validation of raw input
//! - Conversion from CSV records to domain records
//! - Record output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{FieldValue, Record, SortError};
use csv::{StringRecord, WriterBuilder};
use serde::Deserialize;
use std::io::Write;

/// Header row written at the top of every output file
pub const HEADER: [&str; 3] = ["Nome", "Idade", "Pontuacao"];

/// Number of fields every data row must carry
pub const FIELD_COUNT: usize = HEADER.len();

/// CSV record structure for deserialization
///
/// Columns are matched by position, never by header name: the header row
/// is discarded without being looked at. Numeric columns stay as text here
/// so that conversion failures can report the offending value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub name: String,
    pub age: String,
    pub score: String,
}

impl CsvRecord {
    /// Deserialize a raw row, rejecting rows with the wrong number of fields
    ///
    /// # Arguments
    ///
    /// * `row` - The raw CSV row
    /// * `line` - Line number of the row, used in error messages
    pub fn from_row(row: &StringRecord, line: u64) -> Result<Self, SortError> {
        if row.len() != FIELD_COUNT {
            return Err(SortError::parse_error(
                Some(line),
                &format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
            ));
        }

        row.deserialize(None)
            .map_err(|e| SortError::parse_error(Some(line), &e.to_string()))
    }
}

/// Convert a CsvRecord to a Record
///
/// Parses `age` and `score` as base-10 integers. The name is taken as is.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - Line number of the row, used in error messages
///
/// # Returns
///
/// * `Ok(Record)` - Successfully converted record
/// * `Err(SortError::InvalidField)` - Age or score is not an integer
pub fn convert_csv_record(csv_record: CsvRecord, line: u64) -> Result<Record, SortError> {
    let age = parse_integer(&csv_record.age, "age", line)?;
    let score = parse_integer(&csv_record.score, "score", line)?;

    Ok(Record {
        name: csv_record.name,
        age,
        score,
    })
}

fn parse_integer(value: &str, field: &str, line: u64) -> Result<FieldValue, SortError> {
    value
        .parse::<FieldValue>()
        .map_err(|_| SortError::invalid_field(line, field, value))
}

#[derive(Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    AfterQuote,
}

/// Check the quoting structure of raw CSV input
///
/// The `csv` reader accepts loosely quoted input and silently rewrites it
/// (`"bo"b` becomes `bob`). This pass rejects, as a parse error:
/// - a quote inside a field that did not start with one
/// - anything but a delimiter or line end after a closing quote
/// - end of input inside a quoted field
///
/// Quoted fields may span lines. `\r\n` line ends are accepted.
pub fn check_quoting(input: &[u8]) -> Result<(), SortError> {
    let mut state = QuoteState::FieldStart;
    let mut line: u64 = 1;
    let mut field_line: u64 = 1;
    let mut bytes = input.iter().copied().peekable();

    while let Some(byte) = bytes.next() {
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::AfterQuote,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::FieldStart, b'"') => {
                field_line = line;
                QuoteState::Quoted
            }
            (QuoteState::AfterQuote, b'"') => QuoteState::Quoted,
            (QuoteState::AfterQuote, b'\r') if bytes.peek() == Some(&b'\n') => {
                QuoteState::AfterQuote
            }
            (QuoteState::Unquoted, b'"') => {
                return Err(SortError::parse_error(
                    Some(line),
                    "bare \" in non-quoted field",
                ))
            }
            (QuoteState::AfterQuote, b',' | b'\n') => QuoteState::FieldStart,
            (QuoteState::AfterQuote, _) => {
                return Err(SortError::parse_error(
                    Some(line),
                    "extraneous or missing \" in quoted field",
                ))
            }
            (_, b',' | b'\n') => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    if state == QuoteState::Quoted {
        return Err(SortError::parse_error(
            Some(field_line),
            "unterminated quoted field",
        ));
    }

    Ok(())
}

/// Write records to CSV format
///
/// Writes the fixed header followed by one row per record, in slice order.
/// Fields are quoted only when they contain a delimiter, quote or newline.
///
/// # Arguments
///
/// * `records` - Records to write, already in output order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(SortError)` if a write error occurred
pub fn write_records_csv(records: &[Record], output: &mut dyn Write) -> Result<(), SortError> {
    // The header is written by hand, serde would use the field names
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(HEADER)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
