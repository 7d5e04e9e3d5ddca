//! Run progress and summary output.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::plan::CommitDefinition;
use crate::sequence::{OutcomeSink, RunOutcome};

/// Where the final instruction tells the user to push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    pub remote: String,
    pub branch: String,
}

impl Default for PushTarget {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub skipped_no_paths: usize,
    pub skipped_no_diff: usize,
    pub failed: usize,
    /// Commits reachable from HEAD after the run.
    pub history_length: u64,
}

impl RunSummary {
    /// Definitions that did not produce a commit, for any reason.
    pub fn skipped(&self) -> usize {
        self.skipped_no_paths + self.skipped_no_diff + self.failed
    }

    fn tally(&mut self, outcome: &RunOutcome) {
        match outcome {
            RunOutcome::Committed => self.created += 1,
            RunOutcome::SkippedNoPaths => self.skipped_no_paths += 1,
            RunOutcome::SkippedNoDiff => self.skipped_no_diff += 1,
            RunOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Writes one line per created commit and a summary block at the end.
///
/// Skipped definitions produce no output lines; they are logged at debug level.
pub struct Reporter<W: Write> {
    out: W,
    push: PushTarget,
    summary: RunSummary,
}

impl Reporter<io::Stdout> {
    pub fn stdout(push: PushTarget) -> Self {
        Self::new(io::stdout(), push)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, push: PushTarget) -> Self {
        Self {
            out,
            push,
            summary: RunSummary::default(),
        }
    }

    /// Announce the start of a run.
    pub fn begin(&mut self, definitions: usize) {
        self.line(&format!(
            "Creating commit history from {} definitions...\n",
            definitions
        ));
    }

    /// Write the summary block and push instruction, returning the final counts.
    pub fn finish(mut self, history_length: u64) -> RunSummary {
        self.summary.history_length = history_length;

        let block = format!(
            "\nSummary:\n   \
             Total commits created: {}\n   \
             Skipped (no changes): {}\n   \
             Total commits in repo: {}\n\n\
             Ready to push:\n   \
             Run: git push -u {} {}",
            self.summary.created,
            self.summary.skipped(),
            history_length,
            self.push.remote,
            self.push.branch
        );
        self.line(&block);

        if let Err(e) = self.out.flush() {
            warn!("Failed to flush output: {}", e);
        }

        self.summary
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write> OutcomeSink for Reporter<W> {
    fn record(&mut self, definition: &CommitDefinition, outcome: &RunOutcome) {
        self.summary.tally(outcome);
        let summary_line = definition.message().summary();

        match outcome {
            RunOutcome::Committed => {
                let n = self.summary.created;
                self.line(&format!("✓ Commit {}: {}", n, summary_line));
            }
            RunOutcome::SkippedNoPaths => debug!("Skipped '{}': no paths exist", summary_line),
            RunOutcome::SkippedNoDiff => debug!("Skipped '{}': no changes", summary_line),
            RunOutcome::Failed(reason) => debug!("Skipped '{}': {}", summary_line, reason),
        }
    }
}
