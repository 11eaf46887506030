//! In-memory runner for exercising steps without spawning processes

use crate::{
    error::{Result, RunnerError},
    utils::process::{CommandRunner, Invocation},
};
use std::cell::RefCell;

/// Records invocations; commands matching a configured prefix fail or are missing
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    failing: Vec<String>,
    missing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix` exit non-zero
    pub fn failing(mut self, prefix: &str) -> Self {
        self.failing.push(prefix.to_string());
        self
    }

    /// Commands starting with `prefix` are not installed
    pub fn missing(mut self, prefix: &str) -> Self {
        self.missing.push(prefix.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Program names in call order
    pub fn programs(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|i| i.program.clone())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.invocations.borrow_mut().push(invocation.clone());
        let command = invocation.to_string();

        if self.missing.iter().any(|p| command.starts_with(p.as_str())) {
            return Err(RunnerError::command_not_found(&invocation.program));
        }
        if self.failing.iter().any(|p| command.starts_with(p.as_str())) {
            return Err(RunnerError::process(command, Some(1)));
        }
        Ok(())
    }
}
