//! Repository queries: is anything staged, and how long is history.

use tracing::{debug, warn};

use crate::exec::{CommandExecutor, args};

/// Whether the index differs from the last commit.
///
/// Runs `git diff --cached --name-only`; any listed name means there is
/// something to commit. A failed query counts as "nothing staged" so a commit
/// is never attempted on an unknown index state.
pub async fn has_staged_changes<E>(executor: &E) -> bool
where
    E: CommandExecutor + ?Sized,
{
    match executor.run(&args(&["diff", "--cached", "--name-only"])).await {
        Ok(output) => !output.stdout.trim().is_empty(),
        Err(e) => {
            warn!("Could not inspect staged changes: {}", e.summary());
            false
        }
    }
}

/// Number of commits reachable from HEAD.
///
/// A repository with no commits yet has an unborn HEAD, which makes the query
/// fail; that and any other failure report 0.
pub async fn history_length<E>(executor: &E) -> u64
where
    E: CommandExecutor + ?Sized,
{
    match executor.run(&args(&["rev-list", "--count", "HEAD"])).await {
        Ok(output) => match output.stdout.trim().parse::<u64>() {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    "Unexpected rev-list output '{}': {}",
                    output.stdout.trim(),
                    e
                );
                0
            }
        },
        Err(e) => {
            debug!("Could not count commits (empty repository?): {}", e.summary());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecError;
    use crate::exec::{CommandOutput, MockCommandExecutor};

    fn failure(stderr: &str) -> ExecError {
        ExecError::NonZeroExit {
            code: Some(128),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    // ============================================
    // Staged Diff Gate Tests
    // ============================================

    #[tokio::test]
    async fn test_staged_names_mean_changes() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run()
            .withf(|args| args.join(" ") == "diff --cached --name-only")
            .times(1)
            .returning(|_| Ok(CommandOutput::from_stdout("a.txt\nsrc/b.rs\n")));

        assert!(has_staged_changes(&mock).await);
    }

    #[tokio::test]
    async fn test_empty_name_list_means_no_changes() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run()
            .times(1)
            .returning(|_| Ok(CommandOutput::from_stdout("\n")));

        assert!(!has_staged_changes(&mock).await);
    }

    #[tokio::test]
    async fn test_failed_diff_query_means_no_changes() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run()
            .times(1)
            .returning(|_| Err(failure("fatal: not a git repository")));

        assert!(!has_staged_changes(&mock).await);
    }

    // ============================================
    // History Length Tests
    // ============================================

    #[tokio::test]
    async fn test_history_length_parses_count() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run()
            .withf(|args| args.join(" ") == "rev-list --count HEAD")
            .times(1)
            .returning(|_| Ok(CommandOutput::from_stdout("42\n")));

        assert_eq!(history_length(&mock).await, 42);
    }

    #[tokio::test]
    async fn test_history_length_unborn_head_is_zero() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run().times(1).returning(|_| {
            Err(failure(
                "fatal: ambiguous argument 'HEAD': unknown revision or path not in the working tree.",
            ))
        });

        assert_eq!(history_length(&mock).await, 0);
    }

    #[tokio::test]
    async fn test_history_length_garbage_output_is_zero() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run()
            .times(1)
            .returning(|_| Ok(CommandOutput::from_stdout("not a number")));

        assert_eq!(history_length(&mock).await, 0);
    }
}
