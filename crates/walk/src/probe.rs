//! Failure-free existence checks.
//!
//! Build output can change underneath the walker when a pipeline step is
//! still flushing files, so existence checks must never abort the run. Any
//! access error (permission denied, broken symlink, vanished file) is
//! reported as absence and the caller moves on.

use std::fs;
use std::path::Path;

/// Reports whether something stat-able exists at `path`.
///
/// Symlinks are resolved; a dangling symlink therefore does not exist. This
/// never returns an error: every failure mode collapses to `false`.
///
/// # Examples
///
/// ```
/// use walk::probe;
///
/// let temp = tempfile::tempdir().unwrap();
/// assert!(probe::exists(temp.path()));
/// assert!(!probe::exists(&temp.path().join("missing")));
/// ```
#[must_use]
pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}
