//! `annotator` section of annotool.yaml

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::orchestrator::settings::{AnnotatorFlags, AnnotatorSettings};
use crate::orchestrator::{tool, workspace};
use crate::temp;

use super::resolve_path;

/// Annotator release expected in the local Maven repository
pub const DEFAULT_ANNOTATOR_VERSION: &str = "1.3.6-alpha-5";

pub const DEFAULT_JAVA: &str = "java";
pub const DEFAULT_INITIALIZER_ANNOTATION: &str = "com.uber.nullaway.annotations.Initializer";
pub const DEFAULT_NULLABLE_ANNOTATION: &str = "javax.annotation.Nullable";
pub const DEFAULT_DEPTH: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorConfig {
    /// Artifact version, used to derive the default `tool_path`
    pub version: String,

    pub java: String,

    /// Overrides the Maven repository lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_path: Option<PathBuf>,

    /// Defaults to `<tmp>/annotator`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_dir: Option<PathBuf>,

    /// Defaults to `cd <repo> && ./gradlew compileJava`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,

    /// Defaults to `<workspace_dir>/paths.tsv`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,

    pub initializer_annotation: String,
    pub nullable_annotation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checker_name: Option<String>,

    pub depth: u32,
    pub flags: AnnotatorFlags,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_ANNOTATOR_VERSION.to_string(),
            java: DEFAULT_JAVA.to_string(),
            tool_path: None,
            workspace_dir: None,
            build_command: None,
            manifest_path: None,
            initializer_annotation: DEFAULT_INITIALIZER_ANNOTATION.to_string(),
            nullable_annotation: DEFAULT_NULLABLE_ANNOTATION.to_string(),
            checker_name: None,
            depth: DEFAULT_DEPTH,
            flags: AnnotatorFlags::default(),
            env: BTreeMap::new(),
        }
    }
}

impl AnnotatorConfig {
    /// Fill in derived defaults; relative paths are taken from `repo_root`
    pub fn resolve(&self, repo_root: &Path) -> Result<AnnotatorSettings> {
        let tool_path = match &self.tool_path {
            Some(path) => resolve_path(repo_root, path),
            None => tool::default_tool_path(&self.version)?,
        };
        let workspace_dir = self
            .workspace_dir
            .as_deref()
            .map_or_else(temp::default_scratch_root, |p| resolve_path(repo_root, p));
        let manifest_path = self.manifest_path.as_deref().map_or_else(
            || workspace_dir.join(workspace::MANIFEST_FILE),
            |p| resolve_path(repo_root, p),
        );
        let build_command = self
            .build_command
            .clone()
            .unwrap_or_else(|| default_build_command(repo_root));

        Ok(AnnotatorSettings {
            java: self.java.clone(),
            tool_path,
            workspace_dir,
            build_command,
            manifest_path,
            initializer_annotation: self.initializer_annotation.clone(),
            nullable_annotation: self.nullable_annotation.clone(),
            checker_name: self.checker_name.clone(),
            depth: self.depth,
            flags: self.flags,
            working_dir: repo_root.to_path_buf(),
            env: self.env.clone(),
        })
    }
}

/// Gradle build of the analyzed project
pub fn default_build_command(repo_root: &Path) -> String {
    format!("cd {} && ./gradlew compileJava", repo_root.display())
}
