//! curate - A CLI tool that builds a curated commit history over an existing working tree.
//!
//! # Overview
//!
//! curate walks an ordered plan of (paths, message) definitions. For each one it
//! stages whichever paths exist, commits if the index changed, and skips
//! otherwise, so rerunning a plan never creates duplicate commits.

pub mod error;
pub mod exec;
pub mod plan;
pub mod report;
pub mod sequence;

// Re-export commonly used types
pub use error::{DefinitionError, ExecError, PlanError};
pub use exec::{CommandExecutor, CommandOutput, GitCli};
pub use plan::{CommitDefinition, CommitMessage, CommitPlan};
pub use report::{PushTarget, Reporter, RunSummary};
pub use sequence::{CommitSequencer, OutcomeSink, RunOutcome, run_and_report};
