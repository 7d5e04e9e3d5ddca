//! Commit sequencing: turn a plan into commits, one definition at a time.
//!
//! For each definition, in authored order:
//! 1. Resolve which of its paths exist (none → skipped, no git calls)
//! 2. `git add -- <path>` for each existing path, best-effort
//! 3. `git diff --cached --name-only` (empty → skipped)
//! 4. `git commit -m <message>`
//!
//! No failure stops the run; every definition gets an outcome.

pub mod decision;
pub mod resolve;
pub mod staging;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::exec::{CommandExecutor, args};
use crate::plan::{CommitDefinition, CommitMessage, CommitPlan};
use crate::report::{Reporter, RunSummary};

pub use decision::{has_staged_changes, history_length};
pub use resolve::{ResolvedPathSet, resolve_paths};
pub use staging::{StagingReport, stage_paths};

/// How one definition was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// None of the definition's paths exist.
    SkippedNoPaths,
    /// Paths were staged but the index matches the last commit.
    SkippedNoDiff,
    /// A commit was created.
    Committed,
    /// The commit command failed; carries git's message.
    Failed(String),
}

/// Receives each outcome as soon as its definition is finished.
pub trait OutcomeSink {
    fn record(&mut self, definition: &CommitDefinition, outcome: &RunOutcome);
}

/// Discards outcomes.
impl OutcomeSink for () {
    fn record(&mut self, _definition: &CommitDefinition, _outcome: &RunOutcome) {}
}

/// Applies a [`CommitPlan`] to the repository at `root`.
pub struct CommitSequencer<'a, E: CommandExecutor + ?Sized> {
    executor: &'a E,
    root: PathBuf,
}

impl<'a, E: CommandExecutor + ?Sized> CommitSequencer<'a, E> {
    pub fn new(executor: &'a E, root: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            root: root.into(),
        }
    }

    /// Process every definition in order, handing each outcome to `sink`.
    pub async fn run<S>(&self, plan: &CommitPlan, sink: &mut S) -> Vec<RunOutcome>
    where
        S: OutcomeSink + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(plan.len());

        for (index, definition) in plan.iter().enumerate() {
            let outcome = self.process(definition).await;
            debug!(
                "Definition #{} '{}': {:?}",
                index,
                definition.message().summary(),
                outcome
            );
            sink.record(definition, &outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Resolve, stage and (if the index changed) commit a single definition.
    pub async fn process(&self, definition: &CommitDefinition) -> RunOutcome {
        let resolved = resolve_paths(&self.root, definition);
        if resolved.is_empty() {
            return RunOutcome::SkippedNoPaths;
        }

        let staging = stage_paths(self.executor, &resolved).await;
        if !staging.rejected.is_empty() {
            debug!(
                "{} of {} paths could not be staged",
                staging.rejected.len(),
                resolved.len()
            );
        }

        if !has_staged_changes(self.executor).await {
            return RunOutcome::SkippedNoDiff;
        }

        self.commit(definition.message()).await
    }

    async fn commit(&self, message: &CommitMessage) -> RunOutcome {
        match self.executor.run(&args(&["commit", "-m", message.text()])).await {
            Ok(_) => RunOutcome::Committed,
            Err(e) => {
                warn!("Commit '{}' failed: {}", message.summary(), e.summary());
                RunOutcome::Failed(e.summary())
            }
        }
    }
}

/// Apply `plan` and report on it: progress lines while running, then the
/// summary with the final history length.
pub async fn run_and_report<E, W>(
    executor: &E,
    root: &Path,
    plan: &CommitPlan,
    mut reporter: Reporter<W>,
) -> RunSummary
where
    E: CommandExecutor + ?Sized,
    W: std::io::Write,
{
    let before = history_length(executor).await;
    debug!("History has {} commits before the run", before);

    reporter.begin(plan.len());
    CommitSequencer::new(executor, root)
        .run(plan, &mut reporter)
        .await;

    let after = history_length(executor).await;
    reporter.finish(after)
}
