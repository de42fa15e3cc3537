//! Scratch directory location for the annotator workspace.

use std::env;
use std::path::PathBuf;

/// Name of the scratch directory created under the system temp dir
const SCRATCH_DIR: &str = "annotator";

/// Returns the absolute base for temporary files.
///
/// A relative `TMPDIR` (e.g. `TMPDIR=tmp`) would put the workspace inside the
/// analyzed repository, so it falls back to the platform default instead.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        return t;
    }
    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Default annotator workspace: `<tmp>/annotator`
pub fn default_scratch_root() -> PathBuf {
    temp_dir_base().join(SCRATCH_DIR)
}
