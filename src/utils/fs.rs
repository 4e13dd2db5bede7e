//! Filesystem helpers for the output directory.

use std::io;
use std::path::{Path, PathBuf};

/// Filesystem failure tagged with the path it happened on
#[derive(Debug, thiserror::Error)]
#[error("{action} '{}': {source}", .path.display())]
pub struct FsError {
    pub action: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Create `dir` and any missing parents. Existing directories are left as they are.
pub fn ensure_dir(dir: &Path) -> Result<(), FsError> {
    std::fs::create_dir_all(dir).map_err(|source| FsError {
        action: "Failed to create directory",
        path: dir.to_path_buf(),
        source,
    })
}

/// Replace the whole content of `path` with `content`.
pub fn write_truncate(path: &Path, content: &str) -> Result<(), FsError> {
    std::fs::write(path, content).map_err(|source| FsError {
        action: "Failed to write",
        path: path.to_path_buf(),
        source,
    })
}
