use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when traversal fails.
///
/// A missing traversal root is not an error (the walk is simply empty); walk
/// errors are raised only for paths that were confirmed to exist and then
/// failed to stat, read, or canonicalize.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Canonicalize { path, source })
    }

    /// Returns the specific failure that terminated traversal.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// Walker failures always carry the offending path, so callers can
    /// forward it into higher-level diagnostics without pattern matching on
    /// [`WalkErrorKind`].
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::Metadata { path, source } => {
                write!(
                    f,
                    "failed to inspect metadata for '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to read directory '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::ReadDirEntry { path, source } => {
                write!(
                    f,
                    "failed to read entry in '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::Canonicalize { path, source } => {
                write!(f, "failed to canonicalize '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::Metadata { source, .. }
            | WalkErrorKind::ReadDir { source, .. }
            | WalkErrorKind::ReadDirEntry { source, .. }
            | WalkErrorKind::Canonicalize { source, .. } => Some(source),
        }
    }
}

/// Classification of traversal failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// Failed to retrieve metadata for an entry confirmed to exist.
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to read the contents of a directory.
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to canonicalize a directory path while preventing cycles.
    Canonicalize {
        /// Directory path that failed to canonicalize.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            WalkErrorKind::Metadata { path, .. }
            | WalkErrorKind::ReadDir { path, .. }
            | WalkErrorKind::ReadDirEntry { path, .. }
            | WalkErrorKind::Canonicalize { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn walk_error_path_matches_variant_path() {
        let metadata = WalkError::metadata(PathBuf::from("meta"), io_error("meta"));
        assert_eq!(Path::new("meta"), metadata.path());

        let read_dir = WalkError::read_dir(PathBuf::from("dir"), io_error("dir"));
        assert_eq!(Path::new("dir"), read_dir.path());

        let read_dir_entry = WalkError::read_dir_entry(PathBuf::from("entry"), io_error("entry"));
        assert_eq!(Path::new("entry"), read_dir_entry.path());

        let canonicalize = WalkError::canonicalize(PathBuf::from("canon"), io_error("canon"));
        assert_eq!(Path::new("canon"), canonicalize.path());
    }

    #[test]
    fn walk_error_display_is_specific_per_variant() {
        let metadata = WalkError::metadata(PathBuf::from("meta"), io_error("boom"));
        assert_eq!(
            "failed to inspect metadata for 'meta': boom",
            metadata.to_string()
        );

        let read_dir = WalkError::read_dir(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to read directory 'dir': boom", read_dir.to_string());

        let read_dir_entry = WalkError::read_dir_entry(PathBuf::from("entry"), io_error("boom"));
        assert_eq!(
            "failed to read entry in 'entry': boom",
            read_dir_entry.to_string()
        );

        let canonicalize = WalkError::canonicalize(PathBuf::from("canon"), io_error("boom"));
        assert_eq!(
            "failed to canonicalize 'canon': boom",
            canonicalize.to_string()
        );
    }

    #[test]
    fn walk_error_source_refers_to_underlying_io_error() {
        let error = WalkError::read_dir(PathBuf::from("dir"), io_error("source"));
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
    }
}
