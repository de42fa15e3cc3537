//! Command implementations for annotool CLI
//!
//! `run` and `prune` return the process exit code; the other commands exit 0
//! on success.

pub mod completions;
pub mod helpers;
pub mod prune;
pub mod run;
pub mod version;
