//! Load commit plans from JSON.
//!
//! A plan file is an array of objects:
//!
//! ```json
//! [
//!   { "paths": "README.md", "message": "docs: add README" },
//!   { "paths": ["src/lib.rs", "src/main.rs"], "message": "feat: core\n\n- details" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{CommitDefinition, CommitMessage, CommitPlan};
use crate::error::PlanError;

/// Plan compiled into the binary, used when no plan file is given.
const BUILTIN_PLAN: &str = include_str!("../../plans/default.json");

/// `paths` may be a single path or a list of paths.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PathSpec {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathSpec {
    fn into_vec(self) -> Vec<PathBuf> {
        match self {
            Self::One(path) => vec![path],
            Self::Many(paths) => paths,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefinition {
    paths: PathSpec,
    message: String,
}

/// Parse a plan from JSON text.
///
/// Definitions are validated in order; the first invalid one is reported with
/// its zero-based index.
pub fn parse_plan(json: &str) -> Result<CommitPlan, PlanError> {
    let raw: Vec<RawDefinition> = serde_json::from_str(json).map_err(PlanError::InvalidJson)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, def)| {
            CommitDefinition::new(def.paths.into_vec(), CommitMessage::parse(&def.message))
                .map_err(|source| PlanError::InvalidDefinition { index, source })
        })
        .collect()
}

/// Read and parse a plan file.
pub fn load_plan(path: &Path) -> Result<CommitPlan, PlanError> {
    let content = std::fs::read_to_string(path).map_err(PlanError::ReadFailed)?;
    let plan = parse_plan(&content)?;
    debug!("Loaded {} commit definitions from {}", plan.len(), path.display());
    Ok(plan)
}

/// The plan compiled into the binary.
pub fn builtin_plan() -> Result<CommitPlan, PlanError> {
    parse_plan(BUILTIN_PLAN)
}
