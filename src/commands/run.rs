//! Run command: prepare the workspace and launch the annotator

use std::path::PathBuf;

use crate::cli::RunArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::repository;

/// Run the annotator and return its exit code
pub fn run(repo: Option<PathBuf>, config: Option<PathBuf>, args: RunArgs) -> Result<i32> {
    let repo_root = repository::resolve_repository_root(repo.as_deref())?;
    let config = helpers::load_config(config.as_deref(), Some(&repo_root))?;
    let orchestrator = Orchestrator::new(config.annotator.resolve(&repo_root)?);

    if args.print_command {
        println!("{}", orchestrator.invocation().command_line());
        return Ok(0);
    }

    tracing::debug!(
        workspace = %orchestrator.settings().workspace_dir.display(),
        "running annotator"
    );
    let outcome = orchestrator.run()?;
    Ok(outcome.exit_code())
}
