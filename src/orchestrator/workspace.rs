//! Scratch workspace preparation
//!
//! The workspace holds the path-pairs manifest handed to the annotator and the
//! numbered result directories the annotator writes. Preparing it is
//! idempotent: the directory is created if needed, the stale result
//! directory `0` is removed and the manifest is rewritten.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Default manifest file name inside the workspace
pub const MANIFEST_FILE: &str = "paths.tsv";

/// Result directory left behind by a previous annotator run
pub const STALE_RESULT_DIR: &str = "0";

/// Checker output descriptor listed as the manifest input
pub const CHECKER_OUTPUT_FILE: &str = "checker.xml";

/// Scanner output descriptor listed as the manifest output
pub const SCANNER_OUTPUT_FILE: &str = "scanner.xml";

/// One (input, output) line of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Ordered list of path pairs, written as tab-separated lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single checker/scanner pair the annotator expects for `workspace_dir`
    pub fn for_workspace(workspace_dir: &Path) -> Self {
        let mut manifest = Self::new();
        manifest.push(
            workspace_dir.join(CHECKER_OUTPUT_FILE),
            workspace_dir.join(SCANNER_OUTPUT_FILE),
        );
        manifest
    }

    pub fn push(&mut self, input: impl Into<PathBuf>, output: impl Into<PathBuf>) {
        self.entries.push(ManifestEntry {
            input: input.into(),
            output: output.into(),
        });
    }

    /// Render as `input<TAB>output\n` per entry
    pub fn to_tsv(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}\t{}\n", e.input.display(), e.output.display()))
            .collect()
    }
}

/// Create the workspace, drop stale results and write the manifest
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn prepare_workspace(dir: &Path, manifest_path: &Path, manifest: &Manifest) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| fs_error::create_dir_failed(dir, &e))?;

    let stale = dir.join(STALE_RESULT_DIR);
    match fs::remove_dir_all(&stale) {
        Ok(()) => tracing::debug!(path = %stale.display(), "removed stale results"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(fs_error::remove_failed(&stale, &e)),
    }

    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error::create_dir_failed(parent, &e))?;
    }
    fs::write(manifest_path, manifest.to_tsv())
        .map_err(|e| fs_error::write_failed(manifest_path, &e))?;

    Ok(())
}
