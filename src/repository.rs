//! Repository root discovery
//!
//! Both tools resolve their paths relative to the top-level directory of the
//! git repository they are run from (the equivalent of
//! `git rev-parse --show-toplevel`).

use normpath::PathExt;
use std::path::{Path, PathBuf};

use crate::error::{AnnotoolError, Result};

/// Find the work tree root of the git repository containing `start`
///
/// `Ok(None)` when there is no repository (or only a bare one); other
/// discovery errors, such as an unreadable `.git`, are propagated.
pub fn find_repository_root(start: &Path) -> Result<Option<PathBuf>> {
    let repo = match git2::Repository::discover(start) {
        Ok(repo) => repo,
        Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    // Normalize for symlinked temp dirs (macOS /var -> /private/var); fall back to the raw path
    Ok(repo.workdir().map(|p| {
        p.normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or_else(|_| p.to_path_buf())
    }))
}

/// Resolve the repository root, starting from `start` or the current directory
#[tracing::instrument(skip_all)]
pub fn resolve_repository_root(start: Option<&Path>) -> Result<PathBuf> {
    let start_dir = match start {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let root = find_repository_root(&start_dir)?.ok_or_else(|| {
        AnnotoolError::NotInGitRepository {
            path: start_dir.display().to_string(),
        }
    })?;

    tracing::debug!(root = %root.display(), "resolved repository root");
    Ok(root)
}
