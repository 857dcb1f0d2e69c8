//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `reader` - File reader with iterator interface
//! - `writer` - File writer for sorted output

pub mod csv_format;
pub mod reader;
pub mod writer;

pub use csv_format::{check_quoting, convert_csv_record, write_records_csv, CsvRecord, HEADER};
pub use reader::{read_records, RecordReader};
pub use writer::write_records;
