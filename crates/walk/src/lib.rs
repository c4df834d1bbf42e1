#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the filesystem traversal used by the precompress pipeline
//! when collecting candidate files from a finished build-output directory.
//! The walker enumerates regular files and directories bottom-up: the
//! contents of a directory are fully yielded before the directory's own
//! entry, and the traversal root is therefore the final entry produced. The
//! implementation keeps ordering stable across platforms by sorting
//! directory entries lexicographically before visiting them.
//!
//! # Design
//!
//! - [`probe::exists`] answers "is there something at this path" without ever
//!   failing; access errors count as absence so traversal survives files
//!   vanishing mid-build.
//! - [`WalkBuilder`] configures a traversal and tolerates a missing root: a
//!   root that does not exist builds an empty walker rather than an error.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values using
//!   an explicit stack of pending directory states, so arbitrarily deep
//!   trees never risk recursion limits.
//! - [`WalkError`] describes I/O failures encountered while querying metadata
//!   or reading directories. Errors capture the offending path so higher
//!   layers can surface actionable diagnostics.
//!
//! # Invariants
//!
//! - Every entry beneath the root is yielded exactly once; directory entries
//!   are yielded after their contents.
//! - Symlinks are resolved through `stat` semantics, and canonical paths of
//!   visited directories are tracked so cycles cannot loop forever.
//! - Traversal never panics; a metadata or read-dir failure on a path that
//!   was confirmed to exist terminates the walk with a [`WalkError`].
//!
//! # Examples
//!
//! Traverse a directory tree and collect the relative paths discovered by
//! the walker. Note the bottom-up ordering: the nested file precedes its
//! parent directory, and the root (empty relative path) comes last.
//!
//! ```
//! use std::fs;
//! use std::path::PathBuf;
//! use walk::WalkBuilder;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("dist");
//! fs::create_dir_all(root.join("assets"))?;
//! fs::write(root.join("assets/app.js"), b"console.log(1)")?;
//! fs::write(root.join("index.html"), b"<html></html>")?;
//!
//! let walker = WalkBuilder::new(&root).build()?;
//! let mut paths = Vec::new();
//! for entry in walker {
//!     paths.push(entry?.relative_path().to_path_buf());
//! }
//!
//! assert_eq!(
//!     paths,
//!     vec![
//!         PathBuf::from("assets/app.js"),
//!         PathBuf::from("assets"),
//!         PathBuf::from("index.html"),
//!         PathBuf::from(""),
//!     ]
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
pub mod probe;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;
