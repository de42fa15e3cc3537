//! Resolved annotator settings
//!
//! Built once at startup from the configuration layer (see `crate::config`)
//! and handed to the [`Orchestrator`](super::Orchestrator).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Switches that are passed to the annotator as bare flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorFlags {
    /// `-dc`: disable the annotator's cache entirely
    pub disable_cache: bool,

    /// `-dfc`: disable the fix impact cache
    pub disable_fix_cache: bool,

    /// `-rboserr`: redirect the build output to stderr
    pub redirect_build_output: bool,

    /// `-dpp`: disable parallel processing
    pub disable_parallel_processing: bool,
}

impl Default for AnnotatorFlags {
    fn default() -> Self {
        Self {
            disable_cache: false,
            disable_fix_cache: true,
            redirect_build_output: false,
            disable_parallel_processing: false,
        }
    }
}

/// Everything needed to prepare the workspace and launch the annotator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorSettings {
    /// Program used to launch the jar (`java`)
    pub java: String,

    /// Annotator jar
    pub tool_path: PathBuf,

    /// Scratch directory passed with `-d`
    pub workspace_dir: PathBuf,

    /// Command the annotator uses to rebuild the target project
    pub build_command: String,

    /// Path-pairs manifest passed with `-cp`
    pub manifest_path: PathBuf,

    /// Fully-qualified initializer annotation
    pub initializer_annotation: String,

    /// Fully-qualified nullable annotation
    pub nullable_annotation: String,

    /// Checker name passed with `-cn`, if any
    pub checker_name: Option<String>,

    /// Search depth bound
    pub depth: u32,

    pub flags: AnnotatorFlags,

    /// Working directory of the launched process (the repository root)
    pub working_dir: PathBuf,

    /// Extra environment variables for the launched process
    pub env: BTreeMap<String, String>,
}
