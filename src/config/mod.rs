//! Configuration handling for annotool
//!
//! Every setting has a compiled-in default. An optional `annotool.yaml` may
//! override any subset of them:
//!
//! ```yaml
//! annotator:
//!   version: 1.3.6-alpha-5
//!   depth: 5
//!   checker_name: NULLAWAY
//!   flags:
//!     disable_cache: true
//! pruner:
//!   source_dir: src/main/java/org/owasp/benchmark/testcode
//!   keep:
//!     category: cmdi
//!     vulnerability: "false"
//! ```
//!
//! The file is looked up from `--config` / `ANNOTOOL_CONFIG` first, then at
//! the repository root. Defaults are resolved once into
//! [`AnnotatorSettings`](crate::orchestrator::AnnotatorSettings) and
//! [`PrunerSettings`](crate::pruner::PrunerSettings).

pub mod annotator;
pub mod pruner;

pub use annotator::AnnotatorConfig;
pub use pruner::PrunerConfig;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnnotoolError, Result};

/// Config file name looked up at the repository root
pub const CONFIG_FILE: &str = "annotool.yaml";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub annotator: AnnotatorConfig,
    pub pruner: PrunerConfig,
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as null rather than an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that need more than one field at a time
    fn validate(&self) -> Result<()> {
        self.pruner
            .layout()
            .validate()
            .map_err(|reason| AnnotoolError::ConfigParseFailed {
                path: "unknown".to_string(),
                reason: format!("pruner: {reason}"),
            })
    }

    /// Read and parse the configuration file at `path`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnnotoolError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            AnnotoolError::ConfigParseFailed { reason, .. } => AnnotoolError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Load from an explicit file, else `<repo_root>/annotool.yaml`, else defaults
    #[tracing::instrument(skip_all)]
    pub fn load(explicit: Option<&Path>, repo_root: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        if let Some(path) = repo_root.map(default_config_path).filter(|p| p.is_file()) {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::from_file(&path);
        }

        Ok(Self::default())
    }
}

/// `<repo_root>/annotool.yaml`
pub fn default_config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(CONFIG_FILE)
}

/// Join relative paths onto `base`, leave absolute ones untouched
pub(crate) fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
