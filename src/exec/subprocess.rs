//! git CLI spawning.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{CommandExecutor, CommandOutput};
use crate::error::ExecError;

/// Environment variable to override which git binary is used.
pub const GIT_ENV_VAR: &str = "CURATE_GIT";

/// Locate the git binary.
///
/// Reads from the CURATE_GIT environment variable if set, otherwise looks up
/// `git` on PATH with the `which` crate. If PATH lookup fails the bare name is
/// returned and the failure surfaces per command as a spawn error.
///
/// Logs a warning if the environment variable is set but does not resolve to
/// an executable.
pub fn locate_git() -> PathBuf {
    match env::var(GIT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => match which::which(v.trim()) {
            Ok(path) => path,
            Err(e) => {
                warn!(
                    "Invalid {} value '{}' ({}), falling back to git on PATH",
                    GIT_ENV_VAR, v, e
                );
                default_git()
            }
        },
        _ => default_git(),
    }
}

fn default_git() -> PathBuf {
    which::which("git").unwrap_or_else(|_| PathBuf::from("git"))
}

/// Executor that shells out to the system `git` binary inside one repository.
///
/// Using the CLI rather than a library binding inherits the user's git config,
/// hooks and signing setup.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    workdir: PathBuf,
}

impl GitCli {
    /// Executor for the repository at `workdir`, using the located git binary.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_program(locate_git(), workdir)
    }

    /// Executor using an explicit program path.
    pub fn with_program(program: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

#[async_trait]
impl CommandExecutor for GitCli {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, ExecError> {
        debug!("git {}", args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExecError::SpawnFailed {
                program: self.program.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ExecError::NonZeroExit {
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
