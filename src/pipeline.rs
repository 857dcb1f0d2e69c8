//! Read, sort and write pipeline
//!
//! This module orchestrates a complete run by coordinating between
//! `read_records` (CSV input), `sort_records` (ordering) and `write_records`
//! (CSV output).
//!
//! # Design
//!
//! Stages run strictly one after another: the whole input is read before
//! sorting starts, and sorting finishes before the output file is created.
//! A read failure therefore never creates or truncates the output file.
//! Errors are tagged with their stage through [`PipelineError`].

use crate::core::{create_comparator, sort_records, RecordComparator, SortPolicy};
use crate::io::{read_records, write_records};
use crate::types::PipelineError;
use log::debug;
use std::path::Path;

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records written, header excluded
    pub records: usize,
}

/// Sorting pipeline bound to one ordering policy
///
/// # Examples
///
/// ```no_run
/// use record_sorter::core::SortPolicy;
/// use record_sorter::pipeline::SortPipeline;
/// use std::path::Path;
///
/// let pipeline = SortPipeline::new(SortPolicy::NameAge);
/// match pipeline.run(Path::new("in.csv"), Path::new("out.csv")) {
///     Ok(summary) => println!("Sorted {} records", summary.records),
///     Err(e) => println!("{}", e),
/// }
/// ```
pub struct SortPipeline {
    comparator: Box<dyn RecordComparator>,
}

impl SortPipeline {
    /// Create a pipeline for the given policy
    pub fn new(policy: SortPolicy) -> Self {
        debug!("using sort policy {:?}", policy);
        Self::with_comparator(create_comparator(policy))
    }

    /// Create a pipeline around a custom comparator
    pub fn with_comparator(comparator: Box<dyn RecordComparator>) -> Self {
        Self { comparator }
    }

    /// Read `input_path`, sort it, and write the result to `output_path`
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` if every stage succeeded
    /// * `Err(PipelineError::Read)` if the input could not be read or parsed
    /// * `Err(PipelineError::Write)` if the output could not be written
    pub fn run(&self, input_path: &Path, output_path: &Path) -> Result<RunSummary, PipelineError> {
        let mut records = read_records(input_path).map_err(PipelineError::Read)?;

        sort_records(&mut records, self.comparator.as_ref());

        write_records(output_path, &records).map_err(PipelineError::Write)?;

        Ok(RunSummary {
            records: records.len(),
        })
    }
}
