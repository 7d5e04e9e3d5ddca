//! curate - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use curate::plan::{builtin_plan, load_plan};
use curate::{GitCli, PushTarget, Reporter, run_and_report};

/// Environment variable holding the log filter.
const LOG_ENV_VAR: &str = "CURATE_LOG";

/// Build a curated commit history from the files in the working tree.
#[derive(Parser, Debug)]
#[command(name = "curate")]
#[command(about = "Build a curated, feature-grouped commit history from the working tree")]
#[command(version)]
struct Cli {
    /// JSON plan file (defaults to the built-in plan)
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Remote named in the final push instruction
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Branch named in the final push instruction
    #[arg(long, default_value = "main")]
    branch: String,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configuration errors stop us before any git command runs
    let root = std::env::current_dir().context("Could not read the current directory")?;

    let plan = match &cli.plan {
        Some(path) => load_plan(path)
            .with_context(|| format!("Failed to load plan {}", path.display()))?,
        None => builtin_plan().context("Built-in plan is invalid")?,
    };

    let git = GitCli::new(&root);
    debug!(
        "Using {} in {}",
        git.program().display(),
        git.workdir().display()
    );

    let push = PushTarget {
        remote: cli.remote,
        branch: cli.branch,
    };

    // From here on the run always completes
    run_and_report(&git, &root, &plan, Reporter::stdout(push)).await;

    Ok(())
}

/// Log to stderr, filtered by CURATE_LOG (default `warn`, `debug` with --verbose).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
