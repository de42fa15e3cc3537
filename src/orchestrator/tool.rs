//! Annotator artifact location
//!
//! The annotator is not downloaded or negotiated: it is expected in the local
//! Maven repository at a version-pinned path.

use std::path::{Path, PathBuf};

use crate::error::{AnnotoolError, Result};

/// Maven group path of the annotator artifact
const MAVEN_GROUP_PATH: &str = "edu/ucr/cs/riple/annotator";

/// Maven artifact id of the annotator
const ARTIFACT_ID: &str = "annotator-core";

/// `~/.m2/repository/edu/ucr/cs/riple/annotator/annotator-core/<v>/annotator-core-<v>.jar`
pub fn maven_artifact_path(home: &Path, version: &str) -> PathBuf {
    home.join(".m2")
        .join("repository")
        .join(MAVEN_GROUP_PATH)
        .join(ARTIFACT_ID)
        .join(version)
        .join(format!("{ARTIFACT_ID}-{version}.jar"))
}

/// Artifact path in the current user's Maven repository
pub fn default_tool_path(version: &str) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(AnnotoolError::HomeDirNotFound)?;
    Ok(maven_artifact_path(&home, version))
}

/// Fail with `ToolNotFound` unless `path` is an existing file
pub fn ensure_tool(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AnnotoolError::ToolNotFound {
            path: path.display().to_string(),
        })
    }
}
