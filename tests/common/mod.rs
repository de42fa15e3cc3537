//! Common test utilities for annotool integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test case directory under the repository root
pub const TESTCODE_DIR: &str = "src/main/java/org/owasp/benchmark/testcode";

/// A temporary git repository for integration tests
pub struct TestRepo {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to repository root
    pub path: PathBuf,
}

impl TestRepo {
    /// Create a new repository with `git init`
    pub fn new() -> Self {
        let repo = Self::without_git();
        git2::Repository::init(&repo.path).expect("Failed to init git repository");
        repo
    }

    /// Create a plain directory that is not a repository
    pub fn without_git() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the repository
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the repository
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the repository
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `<dir>/<name>.java` and `<dir>/<name>.xml`
    pub fn write_pair(&self, dir: &str, name: &str, category: &str, vulnerability: &str) {
        self.write_file(
            &format!("{dir}/{name}.java"),
            &format!("public class {name} {{}}\n"),
        );
        self.write_file(&format!("{dir}/{name}.xml"), &metadata(category, vulnerability));
    }

    pub fn pair_exists(&self, dir: &str, name: &str) -> bool {
        self.file_exists(&format!("{dir}/{name}.java"))
            && self.file_exists(&format!("{dir}/{name}.xml"))
    }

    pub fn pair_gone(&self, dir: &str, name: &str) -> bool {
        !self.file_exists(&format!("{dir}/{name}.java"))
            && !self.file_exists(&format!("{dir}/{name}.xml"))
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// OWASP Benchmark style metadata
pub fn metadata(category: &str, vulnerability: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<test-metadata>\n\
         <benchmark-version>1.2</benchmark-version>\n\
         <category>{category}</category>\n\
         <test-number>00001</test-number>\n\
         <vulnerability>{vulnerability}</vulnerability>\n\
         <cwe>78</cwe>\n</test-metadata>\n"
    )
}

/// annotool command running inside `dir` with a clean environment
#[allow(deprecated)]
pub fn annotool_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("annotool").expect("annotool binary should be built");
    cmd.current_dir(dir)
        .env_remove("ANNOTOOL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
