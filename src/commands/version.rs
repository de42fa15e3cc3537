//! Version command implementation

use crate::config::annotator::DEFAULT_ANNOTATOR_VERSION;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("annotool {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Default annotator: {}", DEFAULT_ANNOTATOR_VERSION);

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported version declared in Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
