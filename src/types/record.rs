//! Record type for the record sorter
//!
//! A record is one data row of the input file: a name plus two integers.
//! Records are created by the reader, reordered by the sorter and consumed
//! by the writer; nothing outlives a single run.

use serde::Serialize;

/// Numeric field type used for both age and score
///
/// Signed, so `-3` is accepted wherever the text is a valid integer.
pub type FieldValue = i64;

/// One parsed row of (name, age, score)
///
/// Field order matches the column order of the file format, which is what
/// the writer relies on when serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Display name, kept verbatim (case and whitespace preserved)
    pub name: String,

    /// Age, parsed from base-10 text
    pub age: FieldValue,

    /// Score, parsed from base-10 text
    pub score: FieldValue,
}

impl Record {
    /// Create a new record
    pub fn new(name: impl Into<String>, age: FieldValue, score: FieldValue) -> Self {
        Record {
            name: name.into(),
            age,
            score,
        }
    }
}
