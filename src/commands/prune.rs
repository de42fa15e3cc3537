//! Prune command: remove test case pairs rejected by the keep rule

use std::path::PathBuf;

use crate::cli::PruneArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::pruner::{self, PairOutcome, PruneReport};
use crate::repository;

/// Prune the configured directory; exits 1 if any pair failed
pub fn run(
    repo: Option<PathBuf>,
    config: Option<PathBuf>,
    args: PruneArgs,
    verbose: bool,
) -> Result<i32> {
    // An explicit --dir works outside a repository
    let repo_root = match &args.dir {
        Some(_) => helpers::optional_repository_root(repo.as_deref())?,
        None => Some(repository::resolve_repository_root(repo.as_deref())?),
    };
    let config = helpers::load_config(config.as_deref(), repo_root.as_deref())?;
    let settings = config
        .pruner
        .resolve(repo_root.as_deref(), args.dir.as_deref(), args.dry_run);

    let report = pruner::prune(&settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        print_report(&report, args.dry_run, verbose);
    }

    for (name, err) in report.failures() {
        eprintln!("Error: {}: {}", name, err);
    }

    Ok(i32::from(report.has_failures()))
}

fn print_report(report: &PruneReport, dry_run: bool, verbose: bool) {
    if dry_run {
        for result in &report.results {
            if matches!(result.outcome, PairOutcome::WouldRemove) {
                println!("Would remove {}", result.base_name);
            }
        }
    }

    if verbose {
        let verb = if dry_run { "would remove" } else { "removed" };
        println!(
            "{}: kept {}, {} {}, failed {}",
            report.dir.display(),
            report.kept(),
            verb,
            report.removed(),
            report.failures().count()
        );
    }
}
