//! Resource pair discovery
//!
//! A pair is a primary file and a metadata file sharing a base name, side by
//! side in the same directory. Discovery is driven by primary files only and
//! does not recurse.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// File extensions distinguishing the two members of a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairLayout {
    pub primary_extension: String,
    pub metadata_extension: String,
}

impl Default for PairLayout {
    fn default() -> Self {
        Self {
            primary_extension: "java".to_string(),
            metadata_extension: "xml".to_string(),
        }
    }
}

impl PairLayout {
    /// Both extensions must be non-empty and distinct, or a metadata file
    /// would be discovered as its own primary
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.primary_extension.is_empty() || self.metadata_extension.is_empty() {
            return Err("pair extensions must not be empty".to_string());
        }
        if self.primary_extension == self.metadata_extension {
            return Err(format!(
                "primary_extension and metadata_extension are both '{}'",
                self.primary_extension
            ));
        }
        Ok(())
    }

    pub fn pair(&self, dir: &Path, base_name: &str) -> ResourcePair {
        ResourcePair {
            base_name: base_name.to_string(),
            primary: dir.join(format!("{base_name}.{}", self.primary_extension)),
            metadata: dir.join(format!("{base_name}.{}", self.metadata_extension)),
        }
    }
}

/// A primary file and its same-named metadata file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePair {
    pub base_name: String,
    pub primary: PathBuf,
    pub metadata: PathBuf,
}

/// Base names of the primary files directly under `dir`, sorted
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover_pairs(dir: &Path, primary_extension: &str) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| fs_error::read_dir_failed(dir, e))?;
        let path = entry.path();
        // Follows symlinks, unlike `entry.file_type()`
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(primary_extension) {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => {
                names.insert(stem.to_string());
            }
            None => tracing::warn!(path = %path.display(), "skipping non UTF-8 file name"),
        }
    }

    tracing::debug!(count = names.len(), "discovered pairs");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_discover_pairs_by_primary_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "BenchmarkTest00001.java");
        touch(temp.path(), "BenchmarkTest00001.xml");
        touch(temp.path(), "BenchmarkTest00002.java");
        touch(temp.path(), "README.md");
        touch(temp.path(), "Orphan.xml");

        let names = discover_pairs(temp.path(), "java").unwrap();

        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["BenchmarkTest00001", "BenchmarkTest00002"]
        );
    }

    #[test]
    fn test_discover_pairs_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "Deep.java");
        touch(temp.path(), "Top.java");

        let names = discover_pairs(temp.path(), "java").unwrap();

        assert!(names.contains("Top"));
        assert!(!names.contains("Deep"));
    }

    #[test]
    fn test_discover_pairs_ignores_directories_with_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("pkg.java")).unwrap();

        assert!(discover_pairs(temp.path(), "java").unwrap().is_empty());
    }

    #[test]
    fn test_discover_pairs_keeps_dotted_base_names() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Case.v2.java");

        let names = discover_pairs(temp.path(), "java").unwrap();
        assert!(names.contains("Case.v2"));
    }

    #[test]
    fn test_discover_pairs_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(discover_pairs(&temp.path().join("missing"), "java").is_err());
    }

    #[test]
    fn test_layout_validate() {
        assert!(PairLayout::default().validate().is_ok());

        let same = PairLayout {
            primary_extension: "xml".to_string(),
            metadata_extension: "xml".to_string(),
        };
        assert!(same.validate().unwrap_err().contains("'xml'"));

        let empty = PairLayout {
            primary_extension: String::new(),
            metadata_extension: "xml".to_string(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_layout_pair_paths() {
        let pair = PairLayout::default().pair(Path::new("cases"), "A");
        assert_eq!(pair.primary, PathBuf::from("cases/A.java"));
        assert_eq!(pair.metadata, PathBuf::from("cases/A.xml"));
    }
}
