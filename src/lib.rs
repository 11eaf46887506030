//! # Check Runner
//!
//! Runs a Python project's test suite, formatting check, import-order check
//! and type checker from one command, and folds the results into a single
//! exit status.
//!
//! ## Features
//!
//! - pytest runs over the whole test directory or a single test file
//! - Optional coverage reporting for the project's primary module
//! - black / isort / mypy checks that are skipped when the tool is missing
//! - Dependency installation from `requirements.txt`
//!
//! ## Example
//!
//! ```no_run
//! use check_runner::{config::Config, core::Dispatcher, utils::ProcessRunner};
//!
//! let config = Config::default();
//! let runner = ProcessRunner::default();
//! let report = Dispatcher::new(&config, &runner).run();
//! std::process::exit(i32::from(report.exit_status()));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
