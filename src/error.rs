//! Error types for curate modules using thiserror.

use thiserror::Error;

/// Errors from running an external command.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command exited with {}: {}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")),
             stderr.trim())]
    NonZeroExit {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl ExecError {
    /// One-line description suitable for log output.
    pub fn summary(&self) -> String {
        match self {
            Self::SpawnFailed { program, source } => format!("{program}: {source}"),
            Self::NonZeroExit { stderr, stdout, .. } => {
                let text = if stderr.trim().is_empty() { stdout } else { stderr };
                text.lines()
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .unwrap_or("no output")
                    .to_string()
            }
        }
    }
}

/// Errors from loading or validating a commit plan.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to read plan file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Plan is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Commit definition #{index} is invalid: {source}")]
    InvalidDefinition {
        index: usize,
        #[source]
        source: DefinitionError,
    },
}

/// Invariant violations in a single commit definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("no paths listed")]
    NoPaths,

    #[error("path #{0} is empty")]
    EmptyPath(usize),

    #[error("commit message summary is empty")]
    EmptySummary,
}
