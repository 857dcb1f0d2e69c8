//! Record Sorter Library
//! # Overview
//!
//! This library reads (name, age, score) records from a CSV file, orders
//! them with a configurable policy, and writes them to a new CSV file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Ordering components:
//!   - [`core::comparator`] - Ordering policies behind the `RecordComparator` trait
//!   - [`core::sorter`] - Stable in-place sort
//! - [`io`] - CSV reading and writing
//! - [`pipeline`] - Read, sort and write orchestration
//!
//! # Ordering Policies
//!
//! - **name**: Case-insensitive name; ties keep input order
//! - **name-age**: Case-insensitive name, then age ascending; remaining
//!   ties keep input order
//!
//! # File Format
//!
//! Comma separated, quoted only where needed, first row `Nome,Idade,Pontuacao`.
//! The input header is skipped without being checked.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{create_comparator, sort_records, RecordComparator, SortPolicy};
pub use io::{read_records, write_records};
pub use pipeline::{RunSummary, SortPipeline};
pub use types::{PipelineError, Record, SortError};
