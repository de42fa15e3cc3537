//! Process orchestrator
//!
//! Runs the NullAway annotator with a reproducible setup:
//! - [`workspace`]: scratch directory and path-pairs manifest
//! - [`invocation`]: annotator command line
//! - [`process`]: synchronous launch with exit code pass-through
//! - [`tool`]: version-pinned artifact lookup

pub mod invocation;
pub mod process;
pub mod settings;
pub mod tool;
pub mod workspace;

pub use invocation::{Invocation, build_invocation};
pub use process::{ProcessOutcome, execute};
pub use settings::{AnnotatorFlags, AnnotatorSettings};
pub use workspace::{Manifest, prepare_workspace};

use crate::error::Result;

/// Runs the annotator described by a fixed set of settings
#[derive(Debug, Clone)]
pub struct Orchestrator {
    settings: AnnotatorSettings,
}

impl Orchestrator {
    pub fn new(settings: AnnotatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnnotatorSettings {
        &self.settings
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::for_workspace(&self.settings.workspace_dir)
    }

    pub fn prepare_workspace(&self) -> Result<()> {
        prepare_workspace(
            &self.settings.workspace_dir,
            &self.settings.manifest_path,
            &self.manifest(),
        )
    }

    pub fn invocation(&self) -> Invocation {
        build_invocation(&self.settings)
    }

    /// Check the artifact, prepare the workspace and run the annotator to completion
    #[tracing::instrument(skip_all, fields(tool = %self.settings.tool_path.display()))]
    pub fn run(&self) -> Result<ProcessOutcome> {
        tool::ensure_tool(&self.settings.tool_path)?;
        self.prepare_workspace()?;
        execute(&self.invocation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnotoolError;
    use std::collections::BTreeMap;
    use std::path::Path;
    use tempfile::TempDir;

    fn settings(root: &Path) -> AnnotatorSettings {
        let workspace_dir = root.join("scratch");
        AnnotatorSettings {
            java: "true".to_string(),
            tool_path: root.join("annotator-core.jar"),
            manifest_path: workspace_dir.join(workspace::MANIFEST_FILE),
            workspace_dir,
            build_command: "true".to_string(),
            initializer_annotation: "a.Init".to_string(),
            nullable_annotation: "a.Nullable".to_string(),
            checker_name: None,
            depth: 1,
            flags: AnnotatorFlags::default(),
            working_dir: root.to_path_buf(),
            env: BTreeMap::new(),
        }
    }

    #[test]
    fn test_run_without_tool_does_not_touch_workspace() {
        let temp = TempDir::new().unwrap();
        let orchestrator = Orchestrator::new(settings(temp.path()));

        let err = orchestrator.run().unwrap_err();

        assert!(matches!(err, AnnotoolError::ToolNotFound { .. }));
        assert!(!temp.path().join("scratch").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_run_prepares_workspace_and_reports_exit_code() {
        let temp = TempDir::new().unwrap();
        let mut s = settings(temp.path());
        // `false` ignores its arguments and exits 1
        s.java = "false".to_string();
        std::fs::write(&s.tool_path, b"PK").unwrap();
        let orchestrator = Orchestrator::new(s);

        let outcome = orchestrator.run().unwrap();

        assert_eq!(outcome.exit_code(), 1);
        let manifest =
            std::fs::read_to_string(temp.path().join("scratch").join(workspace::MANIFEST_FILE))
                .unwrap();
        assert!(manifest.contains("checker.xml\t"));
    }
}
