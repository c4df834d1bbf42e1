use crate::error::WalkError;
use crate::walker::Walker;
use std::path::PathBuf;

/// Configures a filesystem traversal rooted at a specific path.
///
/// The builder tolerates a missing root: when nothing exists at the
/// configured path, [`build`](Self::build) succeeds and produces a walker
/// that yields no entries. This lets the pipeline run against an output
/// directory that a prior build step may not have created.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    include_root: bool,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            include_root: true,
        }
    }

    /// Controls whether the root entry should be included in the output.
    ///
    /// The root is yielded last, after all of its contents. When disabled,
    /// traversal ends with the root's final descendant.
    #[must_use]
    pub const fn include_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    /// Builds a [`Walker`] using the configured options.
    ///
    /// Fails only when the root exists but its metadata or directory
    /// contents cannot be read.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(self.root, self.include_root)
    }
}
