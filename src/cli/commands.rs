//! Command execution for the CLI

use crate::{
    config::Config,
    core::{Dispatcher, Outcome, RunReport},
    utils::process::ProcessRunner,
};
use tracing::{error, info, instrument};

/// Run every requested step with real processes and print the summary
#[instrument(skip(config))]
pub fn execute(config: &Config) -> RunReport {
    let runner = ProcessRunner::new(config.debug);
    let report = Dispatcher::new(config, &runner).run();

    print_summary(&report);
    report
}

/// Per-step results followed by the overall pass/fail banner
fn print_summary(report: &RunReport) {
    let banner = "=".repeat(60);

    info!("{}", banner);
    for entry in &report.steps {
        let mark = match entry.outcome {
            Outcome::Passed => "✓ passed",
            Outcome::Failed => "✗ failed",
            Outcome::Skipped => "- skipped",
        };
        info!("{:<24} {}", entry.step.label(), mark);
    }

    if report.success() {
        info!("✓ All checks passed successfully!");
    } else {
        error!("✗ Some checks failed!");
    }
    info!("{}", banner);
}
