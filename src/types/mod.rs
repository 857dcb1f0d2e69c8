//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: The row type being sorted
//! - `error`: Error types for reading, writing and the overall run

pub mod error;
pub mod record;

pub use error::{PipelineError, SortError};
pub use record::{FieldValue, Record};
