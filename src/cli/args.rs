use crate::core::SortPolicy;
use clap::Parser;
use std::path::PathBuf;

/// One-line usage shown for any argument error
pub const USAGE: &str =
    "Usage: record-sorter [--order <name|name-age>] <input.csv> <output.csv>";

/// Sort name/age/score records from a CSV file
#[derive(Parser, Debug)]
#[command(name = "record-sorter", version)]
#[command(about = "Sort name/age/score records from a CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path
    #[arg(
        value_name = "INPUT",
        allow_hyphen_values = true,
        help = "Path to the input CSV file"
    )]
    pub input_file: PathBuf,

    /// Output CSV file path, created or truncated
    #[arg(
        value_name = "OUTPUT",
        allow_hyphen_values = true,
        help = "Path to the output CSV file"
    )]
    pub output_file: PathBuf,

    /// Ordering policy
    ///
    /// Must come before the paths: once INPUT is taken, every following
    /// argument is read as a path, even one starting with `-`.
    #[arg(
        long = "order",
        value_name = "POLICY",
        value_enum,
        default_value_t = SortPolicy::NameAge,
        help = "Ordering: 'name' for name only or 'name-age' for name then age"
    )]
    pub order: SortPolicy,
}
