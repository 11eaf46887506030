//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Run tests, formatting, import-order and type checks for the project
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "run-tests")]
#[command(after_help = "Examples:
  run-tests                          Run all tests
  run-tests --verbose                Run with verbose output
  run-tests --coverage               Run with coverage report
  run-tests --file test_geo_coding.py
                                     Run a specific test file
  run-tests --lint                   Run linting checks
  run-tests --type-check             Run type checking
  run-tests --all                    Run tests, linting, and type checking
  run-tests -- -k geocode -x         Pass extra arguments to pytest")]
pub struct Args {
    /// Run tests with verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run tests with coverage report
    #[arg(short, long)]
    pub coverage: bool,

    /// Run a specific test file from the test directory
    #[arg(short, long, value_name = "NAME")]
    pub file: Option<String>,

    /// Run code linting checks (black, isort)
    #[arg(short, long)]
    pub lint: bool,

    /// Run type checking with mypy
    #[arg(short, long = "type-check")]
    pub type_check: bool,

    /// Run tests, linting, and type checking
    #[arg(short, long)]
    pub all: bool,

    /// Install test dependencies before running tests
    #[arg(long = "install-deps")]
    pub install_deps: bool,

    /// Project root containing the test directory and requirements file
    #[arg(long = "project-root", value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Additional arguments to pass to pytest
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub pytest_args: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_flags() {
        let args = Args::try_parse_from(["run-tests"]).unwrap();
        assert!(!args.verbose);
        assert!(!args.lint);
        assert!(!args.type_check);
        assert!(!args.all);
        assert!(args.file.is_none());
        assert!(args.pytest_args.is_empty());
    }

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from(["run-tests", "-v", "-c", "-l", "-t", "-a"]).unwrap();
        assert!(args.verbose);
        assert!(args.coverage);
        assert!(args.lint);
        assert!(args.type_check);
        assert!(args.all);
    }

    #[test]
    fn test_parse_file_and_install() {
        let args =
            Args::try_parse_from(["run-tests", "-f", "test_geo.py", "--install-deps"]).unwrap();
        assert_eq!(args.file.as_deref(), Some("test_geo.py"));
        assert!(args.install_deps);
    }

    #[test]
    fn test_parse_passthrough_args() {
        let args = Args::try_parse_from(["run-tests", "-v", "--", "-k", "geocode", "-x"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.pytest_args, vec!["-k", "geocode", "-x"]);
    }
}
