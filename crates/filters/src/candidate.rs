use std::path::Path;

/// Borrowed view of one discovered filesystem entry.
///
/// The walker owns the real entry; selection only needs the path, the size,
/// and whether the entry is a directory, so this view keeps the crates
/// decoupled.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    path: &'a Path,
    size: u64,
    is_dir: bool,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate view over an entry's path and metadata.
    #[must_use]
    pub const fn new(path: &'a Path, size: u64, is_dir: bool) -> Self {
        Self { path, size, is_dir }
    }

    /// Returns the entry's path.
    #[must_use]
    pub const fn path(&self) -> &'a Path {
        self.path
    }

    /// Returns the entry's size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Reports whether the entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }
}
