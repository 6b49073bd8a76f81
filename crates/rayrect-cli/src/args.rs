//! Command-line argument handling for the test suite runner.
//!
//! The surface is deliberately small and fixed: `-h/--help` prints usage,
//! `-ti/--testIds` takes one or more numeric test IDs. Each argument error
//! kind has its own negative exit code; messages go to standard output.

use thiserror::Error;

use crate::cases::TestCase;

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit 0.
    Help,
    /// Run these test cases, already sorted ascending and deduplicated.
    Run(Vec<TestCase>),
}

/// Argument errors, each with a distinct process exit code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// First argument is not a recognized flag.
    #[error("Invalid argument: {0}")]
    UnknownFlag(String),

    /// `-ti/--testIds` was given without any IDs.
    #[error("The -ti/--testIds flag requires IDs.")]
    MissingIds,

    /// One or more IDs are out of range or not integers.
    #[error("invalid test IDs")]
    InvalidIds(Vec<String>),
}

impl ArgsError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::UnknownFlag(_) => -1,
            ArgsError::MissingIds => -2,
            ArgsError::InvalidIds(_) => -3,
        }
    }

    /// Print this error and the usage text to standard output.
    pub fn report(&self) {
        match self {
            ArgsError::UnknownFlag(arg) => {
                println!("Invalid argument: {arg}");
                println!();
            }
            ArgsError::MissingIds => {
                println!("The -ti/--testIds flag requires IDs.");
            }
            ArgsError::InvalidIds(ids) => {
                for id in ids {
                    println!("Invalid ID: {id}");
                }
                println!();
            }
        }
        print!("{}", usage());
    }
}

/// Build the usage text, listing the closed set of test IDs.
pub fn usage() -> String {
    let mut text = String::from(
        "Usage: ./testsuite [flags]\n\
         \n\
         Flags:\n\
         \x20   -h/--help: Prints help info\n\
         \x20   -ti/--testIds [Ids]: Flag for specifying the IDs for the tests you want to run.\n\
         \n\
         Test IDs:\n",
    );
    for case in TestCase::ALL {
        text.push_str(&format!("    {}: Test for {}\n", case.id(), case.name()));
    }
    text
}

/// Parse command-line arguments (without the program name).
///
/// Valid IDs are sorted ascending and deduplicated, so each requested test
/// runs exactly once. Tokens that are not integers get the same treatment as
/// out-of-range IDs.
pub fn parse(args: &[String]) -> Result<Command, ArgsError> {
    let Some(first) = args.first() else {
        return Ok(Command::Help);
    };
    if first == "-h" || first == "--help" {
        return Ok(Command::Help);
    }
    if first != "-ti" && first != "--testIds" {
        return Err(ArgsError::UnknownFlag(first.clone()));
    }

    let raw_ids = &args[1..];
    if raw_ids.is_empty() {
        return Err(ArgsError::MissingIds);
    }

    let mut cases = Vec::new();
    let mut invalid = Vec::new();
    for raw in raw_ids {
        match raw.parse::<usize>().ok().and_then(TestCase::from_id) {
            Some(case) => cases.push(case),
            None => invalid.push(raw.clone()),
        }
    }
    if !invalid.is_empty() {
        return Err(ArgsError::InvalidIds(invalid));
    }

    cases.sort();
    cases.dedup();
    Ok(Command::Run(cases))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(&[]), Ok(Command::Help));
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&argv(&["-h"])), Ok(Command::Help));
        assert_eq!(parse(&argv(&["--help"])), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&argv(&["--frobnicate"])).unwrap_err();
        assert_eq!(err, ArgsError::UnknownFlag("--frobnicate".into()));
        assert_eq!(err.exit_code(), -1);
    }

    #[test]
    fn test_missing_ids() {
        let err = parse(&argv(&["-ti"])).unwrap_err();
        assert_eq!(err, ArgsError::MissingIds);
        assert_eq!(err.exit_code(), -2);
    }

    #[test]
    fn test_out_of_range_id() {
        let err = parse(&argv(&["-ti", "5"])).unwrap_err();
        assert_eq!(err, ArgsError::InvalidIds(vec!["5".into()]));
        assert_eq!(err.exit_code(), -3);
    }

    #[test]
    fn test_non_numeric_id_is_invalid() {
        let err = parse(&argv(&["-ti", "zero", "-3"])).unwrap_err();
        assert_eq!(
            err,
            ArgsError::InvalidIds(vec!["zero".into(), "-3".into()])
        );
        assert_eq!(err.exit_code(), -3);
    }

    #[test]
    fn test_any_invalid_id_rejects_whole_run() {
        // Mixing a valid ID with an invalid one still runs nothing.
        let err = parse(&argv(&["-ti", "0", "5"])).unwrap_err();
        assert_eq!(err, ArgsError::InvalidIds(vec!["5".into()]));
    }

    #[test]
    fn test_ids_deduplicated_and_sorted() {
        let cmd = parse(&argv(&["-ti", "1", "0", "0", "1"])).unwrap();
        assert_eq!(
            cmd,
            Command::Run(vec![TestCase::RectangleIntersection, TestCase::VectorMath])
        );
    }

    #[test]
    fn test_duplicate_single_id_runs_once() {
        let cmd = parse(&argv(&["-ti", "0", "0", "1"])).unwrap();
        let Command::Run(cases) = cmd else {
            panic!("expected a run command");
        };
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0], TestCase::RectangleIntersection);
        assert_eq!(cases[1], TestCase::VectorMath);
    }

    #[test]
    fn test_long_flag_spelling() {
        let cmd = parse(&argv(&["--testIds", "1"])).unwrap();
        assert_eq!(cmd, Command::Run(vec![TestCase::VectorMath]));
    }

    #[test]
    fn test_usage_lists_every_case() {
        let text = usage();
        for case in TestCase::ALL {
            assert!(text.contains(&format!("{}: Test for {}", case.id(), case.name())));
        }
    }
}
