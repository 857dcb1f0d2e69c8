// CLI module
// Command-line interface and argument parsing

mod args;

pub use crate::core::SortPolicy;
pub use args::{CliArgs, USAGE};

use clap::error::ErrorKind;
use clap::Parser;

/// Outcome of argument parsing that does not produce a run
#[derive(Debug)]
pub enum ArgsError {
    /// `--help` or `--version`; clap prints it and exits zero
    Informational(clap::Error),
    /// Wrong positional count, unknown flag or bad policy
    Usage(clap::Error),
}

/// Parse command-line arguments using clap
///
/// Unlike `CliArgs::parse`, this never exits the process: the caller decides
/// where usage text goes and which exit status to use.
pub fn parse_args() -> Result<CliArgs, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an explicit iterator
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Informational(e),
        _ => ArgsError::Usage(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_is_informational() {
        let result = parse_args_from(["program", "--help"]);
        assert!(matches!(result, Err(ArgsError::Informational(_))));
    }

    #[test]
    fn test_wrong_count_is_usage_error() {
        let result = parse_args_from(["program", "only-one.csv"]);
        assert!(matches!(result, Err(ArgsError::Usage(_))));
    }
}
