//! Step orchestration
//!
//! Runs the planned steps in order and folds their outcomes into a single
//! report. Only a failed dependency install or a missing test file stops the
//! run early; every other failure is recorded and the next step still runs.

use crate::{
    config::Config,
    core::{
        checks::{run_lint, run_type_check},
        deps::install_dependencies,
        step::{Outcome, Step, plan},
        suite::{TestSuite, resolve_test_file, run_tests},
    },
    utils::process::CommandRunner,
};
use tracing::{error, info, instrument};

/// Outcome of one executed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub outcome: Outcome,
}

/// Everything that happened during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Executed steps, in order
    pub steps: Vec<StepReport>,
    /// Set when a precondition or the dependency install stopped the run
    pub aborted: bool,
}

impl RunReport {
    fn record(&mut self, step: Step, outcome: Outcome) {
        self.steps.push(StepReport { step, outcome });
    }

    /// True when nothing aborted and no executed step failed
    #[must_use]
    pub fn success(&self) -> bool {
        !self.aborted && self.steps.iter().all(|s| s.outcome.is_success())
    }

    /// Process exit status: 0 on success, 1 otherwise
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        u8::from(!self.success())
    }

    /// Steps that ran, in order
    pub fn executed(&self) -> impl Iterator<Item = Step> + '_ {
        self.steps.iter().map(|s| s.step)
    }
}

/// Runs a configuration's steps against a [`CommandRunner`]
pub struct Dispatcher<'a, R: CommandRunner + ?Sized> {
    config: &'a Config,
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> Dispatcher<'a, R> {
    #[must_use]
    pub const fn new(config: &'a Config, runner: &'a R) -> Self {
        Self { config, runner }
    }

    /// Run every planned step and report
    #[instrument(skip(self))]
    pub fn run(&self) -> RunReport {
        let steps = plan(&self.config.run);
        let mut report = RunReport::default();

        if steps.contains(&Step::Tests) && !self.check_test_file() {
            report.aborted = true;
            return report;
        }

        for step in steps {
            let outcome = self.run_step(step);
            report.record(step, outcome);

            if step == Step::InstallDependencies && !outcome.is_success() {
                error!("Dependency installation failed, aborting");
                report.aborted = true;
                break;
            }
        }

        report
    }

    /// A named test file must exist before anything is invoked
    fn check_test_file(&self) -> bool {
        let Some(name) = &self.config.run.file else {
            return true;
        };

        match resolve_test_file(&self.config.tests_path(), name) {
            Ok(_) => true,
            Err(e) => {
                error!("{e}");
                TestSuite::new(self.config).list_available();
                false
            }
        }
    }

    fn run_step(&self, step: Step) -> Outcome {
        info!("{}", "=".repeat(60));
        info!("{}", step);
        info!("{}", "=".repeat(60));

        match step {
            Step::InstallDependencies => install_dependencies(self.runner, self.config),
            Step::Lint => run_lint(self.runner, self.config),
            Step::TypeCheck => run_type_check(self.runner, self.config),
            Step::Tests => run_tests(self.runner, self.config),
        }
    }
}
