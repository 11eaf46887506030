//! Test execution with pytest
//!
//! Resolves what to run (whole test directory or one file inside it) and
//! builds the pytest argument vector.

use crate::{
    config::Config,
    core::step::Outcome,
    error::{Result, RunnerError},
    utils::{
        fs::{ScopedDir, find_test_files},
        process::{CommandRunner, Invocation},
    },
};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// What pytest is pointed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestTarget {
    /// The whole test directory
    Suite(PathBuf),
    /// A single file inside the test directory
    File(PathBuf),
}

/// Resolve `name` to an existing file inside `tests_dir`
///
/// Nested names like `geo/test_x.py` are allowed; directories are not.
pub fn resolve_test_file(tests_dir: &Path, name: &str) -> Result<PathBuf> {
    let relative = Path::new(name);
    let stays_inside = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if name.is_empty() || !stays_inside {
        return Err(RunnerError::InvalidTestFile {
            name: name.to_string(),
        });
    }

    let path = tests_dir.join(relative);
    if !path.is_file() {
        return Err(RunnerError::TestFileNotFound { path });
    }

    Ok(path)
}

/// Builds and runs the pytest invocation for a configuration
#[derive(Debug)]
pub struct TestSuite<'a> {
    config: &'a Config,
}

impl<'a> TestSuite<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Decide the target, checking that it exists
    pub fn target(&self) -> Result<TestTarget> {
        let tests_dir = self.config.tests_path();

        match &self.config.run.file {
            Some(name) => resolve_test_file(&tests_dir, name).map(TestTarget::File),
            None if tests_dir.is_dir() => Ok(TestTarget::Suite(tests_dir)),
            None => Err(RunnerError::TestsDirMissing { path: tests_dir }),
        }
    }

    /// The pytest command line for `target`
    ///
    /// Passthrough arguments are only forwarded for whole-suite runs, and the
    /// HTML coverage report is only requested there.
    #[must_use]
    pub fn invocation(&self, target: &TestTarget) -> Invocation {
        let options = &self.config.run;
        let coverage_target = format!("--cov={}", self.config.module);

        let mut invocation = Invocation::new(&self.config.python)
            .args(["-m", "pytest"])
            .describe("Running tests");

        match target {
            TestTarget::Suite(dir) => {
                invocation = invocation.arg(dir.to_string_lossy());
                if options.verbose {
                    invocation = invocation.arg("-v");
                }
                if options.coverage {
                    invocation = invocation.args([
                        coverage_target,
                        "--cov-report=term-missing".to_string(),
                        "--cov-report=html".to_string(),
                    ]);
                }
                invocation = invocation.args(options.pytest_args.iter().cloned());
            }
            TestTarget::File(file) => {
                invocation = invocation.arg(file.to_string_lossy());
                if options.verbose {
                    invocation = invocation.arg("-v");
                }
                if options.coverage {
                    invocation = invocation
                        .args([coverage_target, "--cov-report=term-missing".to_string()]);
                }
            }
        }

        invocation
    }

    /// Run pytest from the project root
    #[instrument(skip_all)]
    pub fn run<R: CommandRunner + ?Sized>(&self, runner: &R) -> Outcome {
        let target = match self.target() {
            Ok(target) => target,
            Err(e) => {
                error!("{e}");
                if matches!(e, RunnerError::TestFileNotFound { .. }) {
                    self.list_available();
                }
                return Outcome::Failed;
            }
        };

        let _cwd = match ScopedDir::enter(&self.config.project_root) {
            Ok(guard) => guard,
            Err(e) => {
                error!("{e}");
                return Outcome::Failed;
            }
        };

        let invocation = self.invocation(&target);
        info!("Running: {}", invocation.description);

        match runner.run(&invocation) {
            Ok(()) => {
                info!("✓ Tests passed");
                Outcome::Passed
            }
            Err(RunnerError::CommandNotFound { command }) => {
                error!("Command not found: {command}");
                error!("Please make sure pytest is installed: pip install pytest");
                Outcome::Failed
            }
            Err(e) => {
                error!("Error running command: {e}");
                Outcome::Failed
            }
        }
    }

    /// Log the test files that do exist, to help with a mistyped name
    pub fn list_available(&self) {
        let files = find_test_files(&self.config.tests_path());
        if files.is_empty() {
            debug!("No test files found in {}", self.config.tests_path().display());
            return;
        }

        info!("Available test files:");
        for file in files {
            if let Some(name) = file.file_name() {
                info!("  {}", name.to_string_lossy());
            }
        }
    }
}

/// Run the configured tests
pub fn run_tests<R: CommandRunner + ?Sized>(runner: &R, config: &Config) -> Outcome {
    TestSuite::new(config).run(runner)
}
