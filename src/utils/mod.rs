//! Shared utilities.

pub mod fs;

pub use fs::{ensure_dir, write_truncate, FsError};
