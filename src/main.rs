#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use check_runner::{cli, config::Config, setup_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args)?;
    if config.debug {
        let resolved = config.to_json()?;
        tracing::debug!("Resolved configuration:\n{}", resolved);
    }

    // Run the requested steps; any failure maps to exit status 1
    let report = cli::execute(&config);
    Ok(ExitCode::from(report.exit_status()))
}
