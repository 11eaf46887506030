//! Utility modules for common functionality
//!
//! Provides reusable utilities for process execution, working-directory
//! handling and environment lookup.

pub mod env;
pub mod fs;
pub mod process;

pub use fs::ScopedDir;
pub use process::{CommandRunner, Invocation, ProcessRunner};
