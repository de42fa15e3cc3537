//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{AnnotoolError, Result};
use crate::repository;

/// Resolve the directory repository discovery starts from
///
/// If a repo path is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_start_dir(repo: Option<&Path>) -> Result<PathBuf> {
    match repo {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().map_err(|e| AnnotoolError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

/// Repository root if there is one, for commands that can run outside a repository
pub fn optional_repository_root(repo: Option<&Path>) -> Result<Option<PathBuf>> {
    let start = resolve_start_dir(repo)?;
    repository::find_repository_root(&start)
}

/// Load the configuration for a command
pub fn load_config(config: Option<&Path>, repo_root: Option<&Path>) -> Result<Config> {
    Config::load(config, repo_root)
}
