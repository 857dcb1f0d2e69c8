//! Record Sorter CLI
//!
//! Command-line interface for sorting name/age/score records in CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- people.csv sorted.csv
//! cargo run -- --order name people.csv sorted.csv
//! ```
//!
//! The program reads every record from the input file, sorts them with the
//! selected policy, and writes them to the output file under a fresh header.
//! Results, usage text and errors are printed to stdout. Diagnostics go to
//! stderr through `env_logger` and are silent unless `RUST_LOG` is set.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (wrong arguments, unreadable input, unwritable output)

use record_sorter::cli::{self, ArgsError};
use record_sorter::pipeline::SortPipeline;
use std::process;

fn main() {
    env_logger::init();

    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(ArgsError::Informational(e)) => e.exit(),
        Err(ArgsError::Usage(e)) => {
            log::debug!("argument error: {}", e);
            println!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    let pipeline = SortPipeline::new(args.order);
    match pipeline.run(&args.input_file, &args.output_file) {
        Ok(summary) => {
            log::debug!("sorted {} records", summary.records);
            println!("Sort completed successfully.");
        }
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    }
}
