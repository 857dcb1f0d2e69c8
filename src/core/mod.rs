//! Core ordering module
//!
//! This module contains the ordering components:
//! - `comparator` - Record ordering policies and their factory
//! - `sorter` - Stable in-place sort driven by a comparator

pub mod comparator;
pub mod sorter;

pub use comparator::{
    compare_names, create_comparator, NameAgeOrder, NameOrder, RecordComparator, SortPolicy,
};
pub use sorter::sort_records;
