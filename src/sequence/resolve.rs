//! Resolve a definition's paths against the working tree.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::plan::CommitDefinition;

/// The paths of a definition that exist at resolution time, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPathSet {
    paths: Vec<PathBuf>,
}

impl ResolvedPathSet {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Keep the paths of `definition` that exist under `root`, files or directories.
///
/// Missing paths are a normal outcome, not an error.
pub fn resolve_paths(root: &Path, definition: &CommitDefinition) -> ResolvedPathSet {
    let paths = definition
        .iter_paths()
        .filter(|path| {
            let exists = root.join(path).exists();
            if !exists {
                debug!("Skipping missing path {}", path.display());
            }
            exists
        })
        .map(Path::to_path_buf)
        .collect();

    ResolvedPathSet { paths }
}
