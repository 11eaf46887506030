//! Configuration management for the check runner
//!
//! Splits the per-invocation run options from the project layout and the
//! commands used for each check.

use crate::{cli::Args, error::RunnerError, utils::env};
use serde::Serialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root; pytest runs from here
    pub project_root: PathBuf,
    /// Test directory, relative to the project root
    pub tests_dir: PathBuf,
    /// Dependency manifest, relative to the project root
    pub requirements_file: PathBuf,
    /// Primary module: coverage and type-check target
    pub module: String,
    /// Python interpreter used for pytest and pip
    pub python: String,
    /// Formatting and import-order checks, in order
    pub lint: LintConfig,
    /// Type checker command
    pub type_check: ToolCommand,
    /// Options for this invocation
    pub run: RunOptions,
}

/// Flags and arguments for a single invocation
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunOptions {
    /// Pass `-v` to pytest
    pub verbose: bool,
    /// Collect coverage for the primary module
    pub coverage: bool,
    /// Single test file under the test directory
    pub file: Option<String>,
    /// Run formatting and import-order checks
    pub lint: bool,
    /// Run the type checker
    pub type_check: bool,
    /// Run every step
    pub all: bool,
    /// Install the manifest before anything else
    pub install_deps: bool,
    /// Extra pytest arguments (whole-suite runs only)
    pub pytest_args: Vec<String>,
}

/// An external checker invoked directly by executable name
#[derive(Debug, Clone, Serialize)]
pub struct ToolCommand {
    /// Display name used in diagnostics
    pub name: String,
    /// Executable
    pub program: String,
    /// Arguments
    pub args: Vec<String>,
}

/// Lint configuration
#[derive(Debug, Clone, Serialize)]
pub struct LintConfig {
    /// Formatting check
    pub formatter: ToolCommand,
    /// Import-order check
    pub import_sorter: ToolCommand,
}

impl ToolCommand {
    /// Create a tool command
    pub fn new(name: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Module checked by mypy and measured by coverage
pub const DEFAULT_MODULE: &str = "mm_geo_coder";

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            project_root: PathBuf::from("."),
            tests_dir: PathBuf::from("tests"),
            requirements_file: PathBuf::from("requirements.txt"),
            module: DEFAULT_MODULE.to_string(),
            python: env::DEFAULT_PYTHON.to_string(),
            lint: LintConfig::default(),
            type_check: ToolCommand::new("Type checking", "mypy", &[DEFAULT_MODULE]),
            run: RunOptions::default(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            formatter: ToolCommand::new("Black formatting check", "black", &["--check", "."]),
            import_sorter: ToolCommand::new("Import sorting check", "isort", &["--check-only", "."]),
        }
    }
}

impl From<&Args> for RunOptions {
    fn from(args: &Args) -> Self {
        Self {
            verbose: args.verbose,
            coverage: args.coverage,
            file: args.file.clone(),
            lint: args.lint,
            type_check: args.type_check,
            all: args.all,
            install_deps: args.install_deps,
            pytest_args: args.pytest_args.clone(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, RunnerError> {
        let project_root = match &args.project_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()
                .map_err(|e| RunnerError::file_system("read current directory", ".", e))?,
        };
        // Paths handed to tools must survive the working-directory change
        let project_root = project_root.canonicalize().map_err(|e| {
            RunnerError::config(format!(
                "Project root {} is not accessible: {e}",
                project_root.display()
            ))
        })?;

        let config = Self {
            debug: args.debug,
            project_root,
            python: env::resolve_python(),
            run: RunOptions::from(args),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), RunnerError> {
        if !self.project_root.is_dir() {
            return Err(RunnerError::config(format!(
                "Project root is not a directory: {}",
                self.project_root.display()
            )));
        }

        if self.module.is_empty() {
            return Err(RunnerError::config("Primary module name is empty"));
        }

        Ok(())
    }

    /// Path of the test directory
    #[must_use]
    pub fn tests_path(&self) -> PathBuf {
        self.project_root.join(&self.tests_dir)
    }

    /// Path of the dependency manifest
    #[must_use]
    pub fn requirements_path(&self) -> PathBuf {
        self.project_root.join(&self.requirements_file)
    }

    /// Resolved configuration as pretty-printed JSON, for `--debug` output
    pub fn to_json(&self) -> Result<String, RunnerError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RunnerError::config(format!("Failed to serialize configuration: {e}")))
    }
}
