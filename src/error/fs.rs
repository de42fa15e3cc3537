//! File system error constructors
//!
//! Each constructor captures the offending path so diagnostics name the file.

use std::io;
use std::path::Path;

use super::AnnotoolError;

pub fn read_failed(path: &Path, err: &io::Error) -> AnnotoolError {
    AnnotoolError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: &io::Error) -> AnnotoolError {
    AnnotoolError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn remove_failed(path: &Path, err: &io::Error) -> AnnotoolError {
    AnnotoolError::FileRemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn create_dir_failed(path: &Path, err: &io::Error) -> AnnotoolError {
    AnnotoolError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn read_dir_failed(path: &Path, reason: impl ToString) -> AnnotoolError {
    AnnotoolError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
