//! Environment handling utilities
//!
//! Resolves which python interpreter drives pytest, pip and coverage.

use std::path::PathBuf;
use tracing::debug;

/// Explicit interpreter override
pub const PYTHON_ENV_VAR: &str = "RUN_TESTS_PYTHON";

/// Fallback when no override or virtualenv is present
pub const DEFAULT_PYTHON: &str = "python3";

/// Resolve the python interpreter from the process environment
pub fn resolve_python() -> String {
    resolve_python_with(|key| std::env::var(key).ok())
}

/// Resolve the python interpreter using `lookup` for environment variables
///
/// Order: `RUN_TESTS_PYTHON`, then `$VIRTUAL_ENV/bin/python`, then `python3`.
pub fn resolve_python_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(python) = lookup(PYTHON_ENV_VAR).filter(|v| !v.is_empty()) {
        debug!("Using interpreter from {}: {}", PYTHON_ENV_VAR, python);
        return python;
    }

    if let Some(venv) = lookup("VIRTUAL_ENV").filter(|v| !v.is_empty()) {
        let python = PathBuf::from(venv).join("bin").join("python");
        debug!("Using virtualenv interpreter: {}", python.display());
        return python.to_string_lossy().into_owned();
    }

    DEFAULT_PYTHON.to_string()
}
