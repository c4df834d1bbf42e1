use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::probe;
use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Bottom-up iterator over filesystem entries.
///
/// Directories are tracked on an explicit stack of pending states rather
/// than through recursion. A directory's contents are yielded before the
/// directory's own entry, so consumers see leaves first and the traversal
/// root last.
pub struct Walker {
    stack: Vec<DirectoryState>,
    pending_file: Option<WalkEntry>,
    visited: HashSet<PathBuf>,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, include_root: bool) -> Result<Self, WalkError> {
        let root = absolutize(root)?;

        let mut walker = Self {
            stack: Vec::new(),
            pending_file: None,
            visited: HashSet::new(),
            finished: false,
        };

        // A root that never existed (or vanished before the walk began) is
        // an empty traversal, not an error.
        if !probe::exists(&root) {
            walker.finished = true;
            return Ok(walker);
        }

        let metadata =
            fs::metadata(&root).map_err(|error| WalkError::metadata(root.clone(), error))?;

        if metadata.is_dir() {
            let canonical = fs::canonicalize(&root)
                .map_err(|error| WalkError::canonicalize(root.clone(), error))?;
            walker.visited.insert(canonical);
            let state =
                DirectoryState::new(root, PathBuf::new(), 0, metadata, true, include_root)?;
            walker.stack.push(state);
        } else if include_root {
            walker.pending_file = Some(WalkEntry {
                full_path: root,
                relative_path: PathBuf::new(),
                metadata,
                depth: 0,
                is_root: true,
            });
        } else {
            walker.finished = true;
        }

        Ok(walker)
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(entry) = self.pending_file.take() {
            self.finished = true;
            return Some(Ok(entry));
        }

        loop {
            let step = {
                let state = self.stack.last_mut()?;
                state.next_name().map(|name| {
                    let full_path = state.fs_path.join(&name);
                    let relative_path = if state.relative_path.as_os_str().is_empty() {
                        PathBuf::from(&name)
                    } else {
                        state.relative_path.join(&name)
                    };
                    (full_path, relative_path, state.depth + 1)
                })
            };

            let Some((full_path, relative_path, depth)) = step else {
                // Directory exhausted: its own entry follows its contents.
                let state = self.stack.pop().expect("stack checked non-empty above");
                if !state.emit {
                    continue;
                }
                return Some(Ok(state.into_entry()));
            };

            // Entries that vanished between read_dir and stat are skipped.
            if !probe::exists(&full_path) {
                continue;
            }

            let metadata = match fs::metadata(&full_path) {
                Ok(metadata) => metadata,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(WalkError::metadata(full_path, error)));
                }
            };

            if !metadata.is_dir() {
                return Some(Ok(WalkEntry {
                    full_path,
                    relative_path,
                    metadata,
                    depth,
                    is_root: false,
                }));
            }

            let canonical = match fs::canonicalize(&full_path) {
                Ok(canonical) => canonical,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(WalkError::canonicalize(full_path, error)));
                }
            };

            if self.visited.insert(canonical) {
                match DirectoryState::new(full_path, relative_path, depth, metadata, false, true) {
                    Ok(state) => {
                        self.stack.push(state);
                    }
                    Err(error) => {
                        self.finished = true;
                        return Some(Err(error));
                    }
                }
            } else {
                // A directory reached through a second link (symlink cycle or
                // duplicate): yield the entry without descending again.
                return Some(Ok(WalkEntry {
                    full_path,
                    relative_path,
                    metadata,
                    depth,
                    is_root: false,
                }));
            }
        }
    }
}

#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_path: PathBuf,
    metadata: fs::Metadata,
    entries: Vec<OsString>,
    index: usize,
    depth: usize,
    is_root: bool,
    emit: bool,
}

impl DirectoryState {
    fn new(
        fs_path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
        metadata: fs::Metadata,
        is_root: bool,
        emit: bool,
    ) -> Result<Self, WalkError> {
        let mut entries = Vec::new();
        let read_dir =
            fs::read_dir(&fs_path).map_err(|error| WalkError::read_dir(fs_path.clone(), error))?;
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::read_dir_entry(fs_path.clone(), error))?;
            entries.push(entry.file_name());
        }
        entries.sort();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "precompress::walk",
            path = %fs_path.display(),
            entries = entries.len(),
            "enter_directory"
        );

        Ok(Self {
            fs_path,
            relative_path,
            metadata,
            entries,
            index: 0,
            depth,
            is_root,
            emit,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        if let Some(name) = self.entries.get(self.index) {
            self.index += 1;
            Some(name.clone())
        } else {
            None
        }
    }

    fn into_entry(self) -> WalkEntry {
        WalkEntry {
            full_path: self.fs_path,
            relative_path: self.relative_path,
            metadata: self.metadata,
            depth: self.depth,
            is_root: self.is_root,
        }
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir()
            .map_err(|error| WalkError::canonicalize(PathBuf::from("."), error))?;
        Ok(cwd.join(path))
    }
}
