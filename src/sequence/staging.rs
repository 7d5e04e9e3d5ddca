//! Best-effort staging of resolved paths.

use std::path::PathBuf;

use tracing::warn;

use super::resolve::ResolvedPathSet;
use crate::exec::{CommandExecutor, args};

/// What happened when staging a resolved path set.
///
/// Informational only: whether anything actually changed is decided by the
/// staged-diff check afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagingReport {
    pub staged: Vec<PathBuf>,
    pub rejected: Vec<(PathBuf, String)>,
}

/// Run `git add -- <path>` for each path.
///
/// A path git refuses does not stop the remaining paths from being staged.
pub async fn stage_paths<E>(executor: &E, resolved: &ResolvedPathSet) -> StagingReport
where
    E: CommandExecutor + ?Sized,
{
    let mut report = StagingReport::default();

    for path in resolved.paths() {
        let path_arg = path.to_string_lossy();

        match executor.run(&args(&["add", "--", &*path_arg])).await {
            Ok(_) => report.staged.push(path.clone()),
            Err(e) => {
                warn!("Failed to stage {}: {}", path.display(), e.summary());
                report.rejected.push((path.clone(), e.summary()));
            }
        }
    }

    report
}
