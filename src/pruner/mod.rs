//! Metadata pruner
//!
//! Removes benchmark test cases whose metadata does not match a keep rule:
//! - [`discovery`]: find primary/metadata file pairs
//! - [`metadata`]: extract `category` and `vulnerability`
//! - [`predicate`]: the keep rule
//! - [`prune`]: delete rejected pairs and report per-pair results

pub mod discovery;
pub mod metadata;
pub mod predicate;
pub mod prune;

pub use discovery::{PairLayout, ResourcePair, discover_pairs};
pub use metadata::{Classification, classify};
pub use predicate::{KeepRule, should_keep};
pub use prune::{PairOutcome, PruneReport, prune};

use std::path::PathBuf;

/// Resolved pruner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunerSettings {
    /// Directory holding the pairs
    pub dir: PathBuf,
    pub layout: PairLayout,
    pub keep: KeepRule,
    /// Report without deleting
    pub dry_run: bool,
}
