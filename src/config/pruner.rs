//! `pruner` section of annotool.yaml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::pruner::{KeepRule, PairLayout, PrunerSettings};

use super::resolve_path;

/// OWASP Benchmark test case directory, relative to the repository root
pub const DEFAULT_SOURCE_DIR: &str = "src/main/java/org/owasp/benchmark/testcode";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrunerConfig {
    pub source_dir: PathBuf,
    pub primary_extension: String,
    pub metadata_extension: String,
    pub keep: KeepRule,
}

impl Default for PrunerConfig {
    fn default() -> Self {
        let layout = PairLayout::default();
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            primary_extension: layout.primary_extension,
            metadata_extension: layout.metadata_extension,
            keep: KeepRule::default(),
        }
    }
}

impl PrunerConfig {
    pub fn layout(&self) -> PairLayout {
        PairLayout {
            primary_extension: self.primary_extension.clone(),
            metadata_extension: self.metadata_extension.clone(),
        }
    }

    /// Settings for pruning `dir`, or `source_dir` under `repo_root` when no dir is given
    pub fn resolve(
        &self,
        repo_root: Option<&Path>,
        dir: Option<&Path>,
        dry_run: bool,
    ) -> PrunerSettings {
        let dir = match (dir, repo_root) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(root)) => resolve_path(root, &self.source_dir),
            (None, None) => self.source_dir.clone(),
        };

        PrunerSettings {
            dir,
            layout: self.layout(),
            keep: self.keep.clone(),
            dry_run,
        }
    }
}
