//! Steps, their outcomes, and the order they run in

use crate::config::RunOptions;
use std::fmt;

/// One independently-reported unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Install the dependency manifest
    InstallDependencies,
    /// Formatting and import-order checks
    Lint,
    /// Static type checking
    TypeCheck,
    /// Test execution
    Tests,
}

impl Step {
    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InstallDependencies => "Dependency installation",
            Self::Lint => "Linting",
            Self::TypeCheck => "Type checking",
            Self::Tests => "Tests",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of running a step or sub-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tool ran and reported success
    Passed,
    /// The tool ran and reported problems, or could not be run
    Failed,
    /// Nothing to do: tool not installed or input absent
    Skipped,
}

impl Outcome {
    /// Skipped counts as success
    #[must_use]
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Failed)
    }

    /// Combine two outcomes: any failure fails, all-skipped stays skipped
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Failed, _) | (_, Self::Failed) => Self::Failed,
            (Self::Skipped, Self::Skipped) => Self::Skipped,
            _ => Self::Passed,
        }
    }
}

/// Steps to run for `options`, in execution order
///
/// Tests are skipped only when lint or type checking was asked for
/// without `all`.
#[must_use]
pub fn plan(options: &RunOptions) -> Vec<Step> {
    let mut steps = Vec::with_capacity(4);

    if options.install_deps {
        steps.push(Step::InstallDependencies);
    }
    if options.lint || options.all {
        steps.push(Step::Lint);
    }
    if options.type_check || options.all {
        steps.push(Step::TypeCheck);
    }
    if !(options.lint || options.type_check) || options.all {
        steps.push(Step::Tests);
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_runs_only_tests() {
        assert_eq!(plan(&RunOptions::default()), vec![Step::Tests]);
    }

    #[test]
    fn test_lint_only() {
        let options = RunOptions {
            lint: true,
            ..RunOptions::default()
        };
        assert_eq!(plan(&options), vec![Step::Lint]);
    }

    #[test]
    fn test_type_check_only() {
        let options = RunOptions {
            type_check: true,
            ..RunOptions::default()
        };
        assert_eq!(plan(&options), vec![Step::TypeCheck]);
    }

    #[test]
    fn test_all_runs_everything() {
        for (lint, type_check) in [(false, false), (true, false), (false, true), (true, true)] {
            let options = RunOptions {
                all: true,
                lint,
                type_check,
                ..RunOptions::default()
            };
            assert_eq!(
                plan(&options),
                vec![Step::Lint, Step::TypeCheck, Step::Tests]
            );
        }
    }

    #[test]
    fn test_install_deps_goes_first() {
        let options = RunOptions {
            install_deps: true,
            all: true,
            ..RunOptions::default()
        };
        assert_eq!(
            plan(&options),
            vec![
                Step::InstallDependencies,
                Step::Lint,
                Step::TypeCheck,
                Step::Tests
            ]
        );
    }

    #[test]
    fn test_outcome_combination() {
        use Outcome::{Failed, Passed, Skipped};

        assert_eq!(Passed.and(Skipped), Passed);
        assert_eq!(Skipped.and(Skipped), Skipped);
        assert_eq!(Skipped.and(Failed), Failed);
        assert_eq!(Failed.and(Passed), Failed);
        assert!(Skipped.is_success());
        assert!(!Failed.is_success());
    }
}
