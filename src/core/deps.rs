//! Dependency installation from the requirements manifest

use crate::{
    config::Config,
    core::step::Outcome,
    utils::process::{CommandRunner, Invocation},
};
use tracing::{error, info, instrument, warn};

/// Install the manifest with pip; a missing manifest is a no-op
#[instrument(skip_all)]
pub fn install_dependencies<R: CommandRunner + ?Sized>(runner: &R, config: &Config) -> Outcome {
    info!("Installing test dependencies...");
    let manifest = config.requirements_path();

    if !manifest.exists() {
        warn!(
            "{} not found, skipping dependency installation",
            config.requirements_file.display()
        );
        return Outcome::Skipped;
    }

    let invocation = Invocation::new(&config.python)
        .args(["-m", "pip", "install", "-r"])
        .arg(manifest.to_string_lossy())
        .describe(format!(
            "Installing dependencies from {}",
            config.requirements_file.display()
        ));

    info!("Running: {}", invocation.description);
    match runner.run(&invocation) {
        Ok(()) => {
            info!("✓ Dependencies installed");
            Outcome::Passed
        }
        Err(e) => {
            error!("✗ Dependency installation failed: {e}");
            Outcome::Failed
        }
    }
}
