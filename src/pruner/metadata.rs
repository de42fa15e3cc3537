//! Test case metadata classification
//!
//! Metadata files are read as plain text: only the literal `<category>` and
//! `<vulnerability>` markers matter, so no XML parser is involved.

use std::fs;
use std::path::Path;

use crate::error::{AnnotoolError, Result, fs as fs_error};

pub const CATEGORY_TAG: &str = "category";
pub const VULNERABILITY_TAG: &str = "vulnerability";

/// The two classification fields of a test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub vulnerability: String,
}

impl Classification {
    /// Extract both fields from metadata text; `path` only names the file in errors
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let field = |tag: &str| {
            extract_tag(content, tag)
                .map(str::to_string)
                .ok_or_else(|| AnnotoolError::malformed_metadata(path, tag))
        };

        Ok(Self {
            category: field(CATEGORY_TAG)?,
            vulnerability: field(VULNERABILITY_TAG)?,
        })
    }
}

/// Text between the first `<tag>` and the next `</tag>`
pub fn extract_tag<'a>(content: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = content.find(&open)? + open.len();
    let len = content[start..].find(&close)?;
    Some(&content[start..start + len])
}

/// Read and classify the metadata file at `path`
pub fn classify(path: &Path) -> Result<Classification> {
    let content = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))?;
    Classification::parse(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<test-metadata>
<benchmark-version>1.2</benchmark-version>
<category>cmdi</category>
<test-number>00006</test-number>
<vulnerability>false</vulnerability>
<cwe>78</cwe>
</test-metadata>
"#;

    #[test]
    fn test_parse_benchmark_metadata() {
        let c = Classification::parse(SAMPLE, Path::new("A.xml")).unwrap();
        assert_eq!(c.category, "cmdi");
        assert_eq!(c.vulnerability, "false");
    }

    #[test]
    fn test_parse_empty_values() {
        let c = Classification::parse(
            "<category></category><vulnerability></vulnerability>",
            Path::new("A.xml"),
        )
        .unwrap();
        assert_eq!(c.category, "");
        assert_eq!(c.vulnerability, "");
    }

    #[test]
    fn test_parse_keeps_whitespace_verbatim() {
        let c = Classification::parse(
            "<category> sqli </category><vulnerability>true\n</vulnerability>",
            Path::new("A.xml"),
        )
        .unwrap();
        assert_eq!(c.category, " sqli ");
        assert_eq!(c.vulnerability, "true\n");
    }

    #[test]
    fn test_extract_tag_uses_first_occurrence() {
        let content = "<category>xss</category><category>cmdi</category>";
        assert_eq!(extract_tag(content, "category"), Some("xss"));
    }

    #[test]
    fn test_extract_tag_missing_close_marker() {
        assert_eq!(extract_tag("<category>cmdi", "category"), None);
    }

    #[test]
    fn test_extract_tag_close_before_open() {
        assert_eq!(extract_tag("</category>x<category>y", "category"), None);
    }

    #[test]
    fn test_parse_missing_vulnerability() {
        let err = Classification::parse("<category>cmdi</category>", Path::new("cases/B.xml"))
            .unwrap_err();
        match err {
            AnnotoolError::MalformedMetadata { path, tag } => {
                assert_eq!(path, "cases/B.xml");
                assert_eq!(tag, VULNERABILITY_TAG);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_category_reported_first() {
        let err = Classification::parse("nothing here", Path::new("C.xml")).unwrap_err();
        assert!(
            matches!(err, AnnotoolError::MalformedMetadata { ref tag, .. } if tag == CATEGORY_TAG)
        );
    }

    #[test]
    fn test_classify_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.xml");
        std::fs::write(&path, SAMPLE).unwrap();

        assert_eq!(classify(&path).unwrap().category, "cmdi");
    }

    #[test]
    fn test_classify_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = classify(&temp.path().join("missing.xml")).unwrap_err();
        assert!(matches!(err, AnnotoolError::FileReadFailed { .. }));
    }
}
