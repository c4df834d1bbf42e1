use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walk::WalkError;

/// Error surfaced to the host when a precompression run fails.
///
/// The batch is all-or-nothing: the first failure observed aborts the run
/// and nothing is reported, although compressed siblings finished by other
/// workers remain on disk.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Filesystem traversal failed on a path confirmed to exist.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Reading a source file failed.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Source file that could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },

    /// Creating or writing a compressed sibling failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Output file that could not be written.
        path: PathBuf,
        /// Underlying error emitted by the operating system or compressor.
        source: io::Error,
    },

    /// The worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// Writing report lines to the host's log sink failed.
    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}

impl EngineError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
