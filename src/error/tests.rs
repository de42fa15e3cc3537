//! Error type tests
//!
//! Tests for AnnotoolError enum, its constructors and conversions.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use crate::error::AnnotoolError;
use crate::error::fs::{read_dir_failed, read_failed, remove_failed};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

test_error_contains!(
    test_tool_not_found_error,
    AnnotoolError::ToolNotFound {
        path: "/home/u/.m2/annotator-core.jar".to_string()
    },
    "Annotator artifact not found",
    "annotator-core.jar"
);

test_error_contains!(
    test_malformed_metadata_error,
    AnnotoolError::malformed_metadata(Path::new("cases/A.xml"), "vulnerability"),
    "cases/A.xml",
    "<vulnerability>"
);

test_error_contains!(
    test_home_dir_not_found_error,
    AnnotoolError::HomeDirNotFound,
    "home directory"
);

#[test]
fn test_error_code() {
    let err = AnnotoolError::ToolNotFound {
        path: "x".to_string(),
    };
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("annotool::tool::not_found".to_string())
    );
}

#[test]
fn test_malformed_metadata_has_help() {
    let err = AnnotoolError::malformed_metadata(Path::new("A.xml"), "category");
    assert!(err.help().is_some());
}

#[test]
fn test_fs_constructors_capture_path() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

    let err = read_failed(Path::new("a/B.xml"), &io_err);
    assert!(matches!(err, AnnotoolError::FileReadFailed { ref path, .. } if path == "a/B.xml"));

    let err = remove_failed(Path::new("a/B.java"), &io_err);
    assert!(err.to_string().contains("a/B.java"));
    assert!(err.to_string().contains("denied"));

    let err = read_dir_failed(Path::new("missing"), "no such directory");
    assert!(matches!(err, AnnotoolError::DirectoryReadFailed { .. }));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AnnotoolError = io_err.into();
    assert!(matches!(err, AnnotoolError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: AnnotoolError = parse_result.unwrap_err().into();
    assert!(matches!(err, AnnotoolError::ConfigParseFailed { .. }));
}

#[test]
fn test_git_error_conversion() {
    let git_err = git2::Error::from_str("git error");
    let err: AnnotoolError = git_err.into();
    assert!(matches!(err, AnnotoolError::GitOperationFailed { .. }));
}
