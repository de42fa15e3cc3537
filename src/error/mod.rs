//! Error types and handling for annotool
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Variants are grouped by domain:
//! - orchestrator errors (missing tool artifact, launch failures)
//! - repository and environment errors
//! - metadata errors raised by the pruner
//! - file system errors
//! - configuration errors

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

pub mod fs;

/// Main error type for annotool operations
#[derive(Error, Diagnostic, Debug)]
pub enum AnnotoolError {
    // Orchestrator errors
    #[error("Annotator artifact not found: {path}")]
    #[diagnostic(
        code(annotool::tool::not_found),
        help(
            "Install the annotator into the local Maven repository or set `annotator.tool_path` in annotool.yaml"
        )
    )]
    ToolNotFound { path: String },

    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(
        code(annotool::process::launch_failed),
        help("Check that the program is installed and on PATH")
    )]
    ProcessLaunchFailed { program: String, reason: String },

    // Environment errors
    #[error("Not in a git repository: {path}")]
    #[diagnostic(
        code(annotool::git::not_in_repo),
        help("Run annotool from inside the analyzed project's repository, or pass --repo <dir>")
    )]
    NotInGitRepository { path: String },

    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(annotool::env::no_home),
        help("Set HOME or configure `annotator.tool_path` explicitly")
    )]
    HomeDirNotFound,

    // Metadata errors
    #[error("Malformed metadata in {path}: missing <{tag}>...</{tag}>")]
    #[diagnostic(
        code(annotool::metadata::malformed),
        help("Each metadata file needs both <category> and <vulnerability> elements")
    )]
    MalformedMetadata { path: String, tag: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(annotool::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(annotool::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove file: {path}: {reason}")]
    #[diagnostic(code(annotool::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(annotool::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(
        code(annotool::fs::read_dir_failed),
        help("Check that the test case directory exists, or pass --dir <dir>")
    )]
    DirectoryReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(annotool::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(annotool::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(annotool::config::parse_failed),
        help("annotool.yaml accepts the top-level sections `annotator` and `pruner`")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(annotool::git::operation_failed))]
    GitOperationFailed { message: String },
}

impl AnnotoolError {
    /// Creates a `MalformedMetadata` error for the file at `path`
    pub fn malformed_metadata(path: &Path, tag: &str) -> Self {
        AnnotoolError::MalformedMetadata {
            path: path.display().to_string(),
            tag: tag.to_string(),
        }
    }
}

impl From<std::io::Error> for AnnotoolError {
    fn from(err: std::io::Error) -> Self {
        AnnotoolError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AnnotoolError {
    fn from(err: serde_yaml::Error) -> Self {
        AnnotoolError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnnotoolError {
    fn from(err: serde_json::Error) -> Self {
        AnnotoolError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for AnnotoolError {
    fn from(err: git2::Error) -> Self {
        AnnotoolError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AnnotoolError>;

#[cfg(test)]
mod tests;
