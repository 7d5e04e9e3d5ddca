//! External command execution.
//!
//! Everything curate does to the repository goes through [`CommandExecutor`],
//! so the sequencing logic can be driven by a mock in tests.

pub mod subprocess;

use async_trait::async_trait;

use crate::error::ExecError;

pub use subprocess::GitCli;

/// Captured output of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout and empty stderr.
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Trait for running version-control commands.
///
/// Implementations must not panic or abort on command failure; a nonzero exit
/// is reported as [`ExecError::NonZeroExit`] and the caller decides what to do.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run the command with the given arguments and wait for it to exit.
    async fn run(&self, args: &[String]) -> Result<CommandOutput, ExecError>;
}

/// Build an owned argument vector from string slices.
pub(crate) fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}
