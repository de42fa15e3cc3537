//! Pair pruning with per-pair failure isolation
//!
//! Every discovered pair gets exactly one [`PairOutcome`]. A failure on one
//! pair is recorded and the loop moves on; only an unreadable directory
//! aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::error::{AnnotoolError, Result, fs as fs_error};

use super::PrunerSettings;
use super::discovery::{ResourcePair, discover_pairs};
use super::metadata::{Classification, classify};
use super::predicate::should_keep;

/// What happened to a single pair
#[derive(Debug)]
pub enum PairOutcome {
    /// Matched the keep rule, left untouched
    Kept,
    /// Both files deleted
    Removed,
    /// Dry run: would have been deleted
    WouldRemove,
    /// Classification or deletion failed; see the error for which file
    Failed(AnnotoolError),
}

impl PairOutcome {
    fn status(&self) -> &'static str {
        match self {
            PairOutcome::Kept => "kept",
            PairOutcome::Removed => "removed",
            PairOutcome::WouldRemove => "would_remove",
            PairOutcome::Failed(_) => "failed",
        }
    }
}

#[derive(Debug)]
pub struct PairResult {
    pub base_name: String,
    pub classification: Option<Classification>,
    pub outcome: PairOutcome,
}

/// Per-pair results of one pruning pass, in base-name order
#[derive(Debug)]
pub struct PruneReport {
    pub dir: PathBuf,
    pub results: Vec<PairResult>,
}

impl PruneReport {
    fn count(&self, pred: impl Fn(&PairOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn kept(&self) -> usize {
        self.count(|o| matches!(o, PairOutcome::Kept))
    }

    pub fn removed(&self) -> usize {
        self.count(|o| matches!(o, PairOutcome::Removed | PairOutcome::WouldRemove))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &AnnotoolError)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            PairOutcome::Failed(err) => Some((r.base_name.as_str(), err)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn to_json(&self) -> Value {
        let pairs: Vec<Value> = self
            .results
            .iter()
            .map(|r| {
                let mut entry = json!({
                    "name": r.base_name,
                    "status": r.outcome.status(),
                });
                if let Some(c) = &r.classification {
                    entry["category"] = json!(c.category);
                    entry["vulnerability"] = json!(c.vulnerability);
                }
                if let PairOutcome::Failed(err) = &r.outcome {
                    entry["error"] = json!(err.to_string());
                }
                entry
            })
            .collect();

        json!({
            "dir": self.dir.display().to_string(),
            "kept": self.kept(),
            "removed": self.removed(),
            "failed": self.failures().count(),
            "pairs": pairs,
        })
    }
}

/// Classify every pair under `settings.dir` and delete the ones the keep rule rejects
#[tracing::instrument(skip_all, fields(dir = %settings.dir.display(), dry_run = settings.dry_run))]
pub fn prune(settings: &PrunerSettings) -> Result<PruneReport> {
    let names = discover_pairs(&settings.dir, &settings.layout.primary_extension)?;
    let pairs: Vec<ResourcePair> = names
        .iter()
        .map(|name| settings.layout.pair(&settings.dir, name))
        .collect();

    Ok(PruneReport {
        dir: settings.dir.clone(),
        results: prune_pairs(&pairs, settings),
    })
}

/// One result per pair, in order; no pair's failure stops the others
fn prune_pairs(pairs: &[ResourcePair], settings: &PrunerSettings) -> Vec<PairResult> {
    pairs.iter().map(|pair| prune_pair(pair, settings)).collect()
}

fn prune_pair(pair: &ResourcePair, settings: &PrunerSettings) -> PairResult {
    let classification = match classify(&pair.metadata) {
        Ok(c) => c,
        Err(err) => {
            tracing::warn!(pair = %pair.base_name, error = %err, "leaving pair untouched");
            return PairResult {
                base_name: pair.base_name.clone(),
                classification: None,
                outcome: PairOutcome::Failed(err),
            };
        }
    };

    let outcome = if should_keep(&classification, &settings.keep) {
        PairOutcome::Kept
    } else if settings.dry_run {
        PairOutcome::WouldRemove
    } else {
        match remove_pair(pair) {
            Ok(()) => PairOutcome::Removed,
            Err(err) => {
                tracing::warn!(pair = %pair.base_name, error = %err, "pair removal failed");
                PairOutcome::Failed(err)
            }
        }
    };
    tracing::debug!(pair = %pair.base_name, status = outcome.status());

    PairResult {
        base_name: pair.base_name.clone(),
        classification: Some(classification),
        outcome,
    }
}

fn remove_pair(pair: &ResourcePair) -> Result<()> {
    remove_file(&pair.metadata)?;
    remove_file(&pair.primary)
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| fs_error::remove_failed(path, &e))
}
