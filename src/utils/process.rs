//! Process execution utilities
//!
//! Every tool is run as a blocking child process with inherited stdout/stderr,
//! one at a time.

use crate::error::{Result, RunnerError};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// A single external command: program, argument vector and a human label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path
    pub program: String,
    /// Arguments, passed verbatim
    pub args: Vec<String>,
    /// Label shown in the step header
    pub description: String,
    /// Working directory for the child; inherited when `None`
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            description: String::new(),
            current_dir: None,
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the step label
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Run the child from `dir`
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Something that can execute an [`Invocation`] to completion
pub trait CommandRunner {
    /// Run the invocation, returning `Ok` only on a zero exit status
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs external processes with inherited stdio
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self, invocation), fields(command = %invocation))]
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let cmd_str = invocation.to_string();

        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("Command: {}", cmd_str);
        }

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &invocation.current_dir {
            debug!("Working directory: {}", dir.display());
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RunnerError::command_not_found(&invocation.program),
                _ => RunnerError::Process {
                    command: cmd_str.clone(),
                    exit_code: None,
                    source: Some(e),
                },
            })?;

        if !status.success() {
            return Err(RunnerError::process(cmd_str, status.code()));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}
