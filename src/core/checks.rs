//! Formatting, import-order and type checks
//!
//! A checker that is not installed is skipped with a warning rather than
//! failing the run.

use crate::{
    config::{Config, ToolCommand},
    core::step::Outcome,
    utils::process::{CommandRunner, Invocation},
};
use tracing::{error, info, instrument, warn};

/// Run one checker from the project root and classify the result
fn run_check<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &Config,
    tool: &ToolCommand,
) -> Outcome {
    let invocation = Invocation::new(&tool.program)
        .args(tool.args.iter().cloned())
        .describe(&tool.name)
        .current_dir(&config.project_root);

    info!("Running: {}", invocation.description);
    match runner.run(&invocation) {
        Ok(()) => {
            info!("✓ {} passed", tool.name);
            Outcome::Passed
        }
        Err(e) if e.is_not_found() => {
            warn!("{} not installed, skipping {}", tool.program, tool.name);
            Outcome::Skipped
        }
        Err(e) => {
            error!("✗ {} failed: {e}", tool.name);
            Outcome::Failed
        }
    }
}

/// Run the formatter check, then the import-order check
///
/// Both always run; the step passes only if neither fails.
#[instrument(skip_all)]
pub fn run_lint<R: CommandRunner + ?Sized>(runner: &R, config: &Config) -> Outcome {
    info!("Running code linting...");

    let formatting = run_check(runner, config, &config.lint.formatter);
    let imports = run_check(runner, config, &config.lint.import_sorter);

    formatting.and(imports)
}

/// Type-check the primary module
#[instrument(skip_all)]
pub fn run_type_check<R: CommandRunner + ?Sized>(runner: &R, config: &Config) -> Outcome {
    info!("Running type checking...");
    run_check(runner, config, &config.type_check)
}
