//! Error types for the record sorter
//!
//! This module defines all error types that can occur while reading,
//! sorting and writing records. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, disk full, etc.
//! - **CSV Parsing Errors**: Ragged rows, unterminated quotes, etc.
//! - **Conversion Errors**: Age or score that is not a base-10 integer
//!
//! Every error is fatal for the run. [`PipelineError`] tags a [`SortError`]
//! with the stage (read or write) that produced it.

use thiserror::Error;

/// Error raised by the reader or the writer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Structurally malformed CSV
    ///
    /// Covers ragged rows, unterminated quotes and invalid UTF-8.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A numeric field that is not a valid base-10 integer
    #[error("Invalid {field} '{value}' at line {line}: expected an integer")]
    InvalidField {
        /// Line number of the offending row
        line: u64,
        /// Column name (`age` or `score`)
        field: String,
        /// The raw text that failed to parse
        value: String,
    },
}

// Conversion from io::Error to SortError
impl From<std::io::Error> for SortError {
    fn from(error: std::io::Error) -> Self {
        SortError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SortError
impl From<csv::Error> for SortError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(_) = error.kind() {
            return SortError::IoError {
                message: error.to_string(),
            };
        }

        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        SortError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl SortError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SortError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        SortError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    /// Create an InvalidField error
    pub fn invalid_field(line: u64, field: &str, value: &str) -> Self {
        SortError::InvalidField {
            line,
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Failure of a complete run, tagged with the stage that failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The input file could not be read; no output was produced
    #[error("error reading input file: {0}")]
    Read(#[source] SortError),

    /// The output file could not be written; it may be partially written
    #[error("error writing output file: {0}")]
    Write(#[source] SortError),
}
