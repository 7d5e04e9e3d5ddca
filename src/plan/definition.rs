//! Commit definitions and messages.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::DefinitionError;

/// A commit message as authored, with its summary line and optional body
/// split out for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
    summary: String,
    body: Option<String>,
}

impl CommitMessage {
    /// Build a message from parts, joined with one blank line.
    pub fn new(summary: impl Into<String>, body: Option<String>) -> Self {
        let summary = summary.into().trim().to_string();
        let body = body.filter(|b| !b.trim().is_empty());
        let text = match &body {
            Some(body) => format!("{}\n\n{}", summary, body),
            None => summary.clone(),
        };
        Self {
            text,
            summary,
            body,
        }
    }

    /// Parse a full message text, keeping it verbatim for the commit.
    ///
    /// The first line is the summary, even when blank. Blank lines between
    /// summary and body are dropped from [`body`](Self::body); a body with no
    /// visible text becomes `None`.
    pub fn parse(text: &str) -> Self {
        let (summary, rest) = text.split_once('\n').unwrap_or((text, ""));

        let body: Vec<&str> = rest
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let body = body.join("\n").trim_end().to_string();

        Self {
            text: text.to_string(),
            summary: summary.trim().to_string(),
            body: Some(body).filter(|b| !b.is_empty()),
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The text handed to `git commit -m`.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for CommitMessage {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One intended logical checkpoint: the paths that make it up and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDefinition {
    paths: Vec<PathBuf>,
    message: CommitMessage,
}

impl CommitDefinition {
    /// Create a definition, checking that it lists at least one non-empty path
    /// and that its summary is not empty.
    pub fn new<I, P>(paths: I, message: impl Into<CommitMessage>) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        let message = message.into();

        if paths.is_empty() {
            return Err(DefinitionError::NoPaths);
        }
        if let Some(pos) = paths.iter().position(|p| p.as_os_str().is_empty()) {
            return Err(DefinitionError::EmptyPath(pos));
        }
        if message.summary().is_empty() {
            return Err(DefinitionError::EmptySummary);
        }

        Ok(Self { paths, message })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn message(&self) -> &CommitMessage {
        &self.message
    }

    /// Iterate the paths in authored order.
    pub fn iter_paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}
