//! File system utility functions
//!
//! Working-directory changes are scoped to a guard so the previous directory
//! comes back on every exit path.

use crate::error::{Result, RunnerError};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Changes the process working directory for as long as it is alive
#[derive(Debug)]
pub struct ScopedDir {
    previous: PathBuf,
}

impl ScopedDir {
    /// Enter `path`, remembering the current directory
    #[instrument]
    pub fn enter<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let previous = env::current_dir()
            .map_err(|e| RunnerError::file_system("read current directory", ".", e))?;

        debug!("Changing directory to: {}", path.display());
        env::set_current_dir(path)
            .map_err(|e| RunnerError::file_system("change directory", path, e))?;

        Ok(Self { previous })
    }
}

impl Drop for ScopedDir {
    fn drop(&mut self) {
        debug!("Restoring directory: {}", self.previous.display());
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}

/// List `test_*.py` files directly under `tests_dir`, sorted by name
pub fn find_test_files(tests_dir: &Path) -> Vec<PathBuf> {
    let pattern = tests_dir.join("test_*.py");
    let Some(pattern) = pattern.to_str() else {
        warn!("Test directory path is not valid UTF-8: {}", tests_dir.display());
        return Vec::new();
    };

    let mut files = Vec::new();
    match glob::glob(pattern) {
        Ok(paths) => {
            for path_result in paths {
                match path_result {
                    Ok(path) => files.push(path),
                    Err(e) => warn!("Error reading test file path: {}", e),
                }
            }
        }
        Err(e) => warn!("Invalid test file pattern {}: {}", pattern, e),
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_scoped_dir_restores_previous() {
        let temp_dir = TempDir::new().unwrap();
        let original = env::current_dir().unwrap();

        {
            let _guard = ScopedDir::enter(temp_dir.path()).unwrap();
            assert_eq!(
                env::current_dir().unwrap().canonicalize().unwrap(),
                temp_dir.path().canonicalize().unwrap()
            );
        }

        assert_eq!(env::current_dir().unwrap(), original);
    }

    #[test]
    #[serial]
    fn test_scoped_dir_missing_target() {
        let temp_dir = TempDir::new().unwrap();
        let original = env::current_dir().unwrap();

        let result = ScopedDir::enter(temp_dir.path().join("does-not-exist"));
        assert!(matches!(result, Err(RunnerError::FileSystem { .. })));
        assert_eq!(env::current_dir().unwrap(), original);
    }

    #[test]
    fn test_find_test_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("test_geo.py"), "").unwrap();
        fs::write(temp_dir.path().join("test_address.py"), "").unwrap();
        fs::write(temp_dir.path().join("conftest.py"), "").unwrap();

        let files = find_test_files(temp_dir.path());
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();

        assert_eq!(names, vec!["test_address.py", "test_geo.py"]);
    }
}
