//! Keep predicate for classified test cases

use serde::{Deserialize, Serialize};

use super::metadata::Classification;

/// Category kept by default
pub const DEFAULT_KEEP_CATEGORY: &str = "cmdi";

/// Vulnerability value kept by default (false positives only)
pub const DEFAULT_KEEP_VULNERABILITY: &str = "false";

/// A pair survives iff both fields match exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeepRule {
    pub category: String,
    pub vulnerability: String,
}

impl Default for KeepRule {
    fn default() -> Self {
        Self {
            category: DEFAULT_KEEP_CATEGORY.to_string(),
            vulnerability: DEFAULT_KEEP_VULNERABILITY.to_string(),
        }
    }
}

impl KeepRule {
    pub fn matches(&self, category: &str, vulnerability: &str) -> bool {
        category == self.category && vulnerability == self.vulnerability
    }
}

/// Whether a classified pair survives `rule`; the default rule keeps
/// command injection false positives only
pub fn should_keep(classification: &Classification, rule: &KeepRule) -> bool {
    rule.matches(&classification.category, &classification.vulnerability)
}
