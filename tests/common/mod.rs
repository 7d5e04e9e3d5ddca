//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};

use curate::{CommitDefinition, CommitPlan, GitCli};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    ///
    /// Identity and signing are configured locally so `git commit` works
    /// regardless of the machine's global config.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executor bound to this repository.
    pub fn git(&self) -> GitCli {
        GitCli::new(self.path())
    }

    /// Write a file (creating parent directories) relative to the repo root.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file and commit it directly through libgit2. Returns the commit OID.
    pub fn commit_file(&self, relative: &str, content: &str, message: &str) -> Oid {
        self.write(relative, content);

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(relative))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Full commit messages reachable from HEAD, oldest first.
    pub fn messages(&self) -> Vec<String> {
        let Ok(head) = self.repo.head() else {
            return Vec::new();
        };
        let head = head.peel_to_commit().expect("HEAD is not a commit");

        let mut walk = self.repo.revwalk().expect("Failed to create revwalk");
        walk.push(head.id()).expect("Failed to push HEAD");
        walk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::REVERSE)
            .expect("Failed to sort revwalk");

        walk.map(|oid| {
            let oid = oid.expect("Failed to walk history");
            let commit = self.repo.find_commit(oid).expect("Failed to find commit");
            commit.message().unwrap_or("").trim_end().to_string()
        })
        .collect()
    }

    /// Summary lines reachable from HEAD, oldest first.
    pub fn summaries(&self) -> Vec<String> {
        self.messages()
            .iter()
            .map(|m| m.lines().next().unwrap_or("").to_string())
            .collect()
    }

    /// Paths changed by the HEAD commit relative to its parent.
    pub fn head_files(&self) -> Vec<String> {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("No HEAD commit");
        let tree = head.tree().expect("Failed to get tree");
        let parent_tree = head.parent(0).ok().map(|p| p.tree().expect("Failed to get tree"));

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .expect("Failed to diff trees");

        let mut files: Vec<String> = diff
            .deltas()
            .filter_map(|d| d.new_file().path().map(|p| p.to_string_lossy().into_owned()))
            .collect();
        files.sort();
        files
    }
}

/// Build a definition, panicking if it is invalid.
pub fn def(paths: &[&str], message: &str) -> CommitDefinition {
    CommitDefinition::new(paths.iter().copied(), message).expect("Invalid definition")
}

/// Build a plan from definitions.
pub fn plan(defs: Vec<CommitDefinition>) -> CommitPlan {
    CommitPlan::new(defs)
}
