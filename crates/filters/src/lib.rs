#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which discovered filesystem entries the precompress
//! pipeline should compress. Selection combines two pure checks: a size
//! threshold and a [`Matcher`] that accepts or rejects the entry's path.
//!
//! # Design
//!
//! - [`Candidate`] is a borrowed view of one traversal entry (path, size,
//!   directory flag) so this crate stays decoupled from the walker.
//! - [`Matcher`] is polymorphic over two variants: a compiled glob set
//!   tested against the full path string, and a caller-supplied predicate
//!   invoked with the whole candidate, enabling decisions based on size or
//!   other metadata rather than just the name.
//! - [`Eligibility`] bundles a matcher with the minimum-size threshold and
//!   exposes the single [`accepts`](Eligibility::accepts) decision.
//!
//! Directory entries get no special treatment here: the walker yields them
//! alongside files, and the extension-shaped matchers used in practice
//! reject them by name. A predicate matcher that wants the same behaviour
//! must check [`Candidate::is_dir`] itself.
//!
//! # Errors
//!
//! Compiling a glob pattern can fail; [`MatcherError`] carries the
//! offending pattern together with the underlying [`globset::Error`].
//!
//! # Examples
//!
//! ```
//! use filters::{Candidate, Eligibility, Matcher};
//! use std::path::Path;
//!
//! let eligibility = Eligibility::default();
//!
//! let css = Candidate::new(Path::new("dist/app.css"), 2000, false);
//! let png = Candidate::new(Path::new("dist/logo.png"), 2000, false);
//! let tiny = Candidate::new(Path::new("dist/tiny.js"), 500, false);
//!
//! assert!(eligibility.accepts(&css));
//! assert!(!eligibility.accepts(&png));
//! assert!(!eligibility.accepts(&tiny));
//!
//! let big_only = Eligibility::new(
//!     Matcher::predicate(|candidate| !candidate.is_dir() && candidate.size() > 1024),
//!     0,
//! );
//! assert!(big_only.accepts(&png));
//! ```

mod candidate;
mod eligibility;
mod error;
mod matcher;

pub use candidate::Candidate;
pub use eligibility::{DEFAULT_MIN_SIZE, Eligibility};
pub use error::MatcherError;
pub use matcher::Matcher;
