//! Batch scheduling across a bounded worker pool.
//!
//! Eligible files fan out over a fixed-size rayon pool while the result
//! order mirrors the discovery order, so the report never depends on which
//! worker finished first. Collection short-circuits on the first failure:
//! the batch either yields every outcome or the error that stopped it.

use std::num::NonZeroUsize;

use rayon::prelude::*;
use walk::{WalkBuilder, WalkEntry};

use filters::Candidate;

use crate::error::EngineError;
use crate::job;
use crate::options::CompressOptions;
use crate::outcome::CompressionOutcome;

/// Collects every entry beneath `root` in traversal order.
///
/// A missing root yields an empty list; any traversal error on an existing
/// path aborts the collection.
pub fn collect_entries(root: &std::path::Path) -> Result<Vec<WalkEntry>, EngineError> {
    let walker = WalkBuilder::new(root).build()?;
    let mut entries = Vec::new();
    for entry in walker {
        entries.push(entry?);
    }
    Ok(entries)
}

/// Filters `entries` down to the ones the options select, preserving
/// discovery order.
#[must_use]
pub fn eligible<'a>(entries: &'a [WalkEntry], options: &CompressOptions) -> Vec<&'a WalkEntry> {
    let eligibility = options.eligibility();
    entries
        .iter()
        .filter(|entry| {
            let candidate = Candidate::new(entry.full_path(), entry.size(), entry.is_dir());
            eligibility.accepts(&candidate)
        })
        .collect()
}

/// Compresses every eligible entry concurrently and returns the outcomes
/// in discovery order, or the first error observed.
pub fn compress_all(
    entries: &[WalkEntry],
    options: &CompressOptions,
) -> Result<Vec<CompressionOutcome>, EngineError> {
    let selected = eligible(entries, options);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "precompress::engine",
        discovered = entries.len(),
        eligible = selected.len(),
        "batch_selected"
    );

    if selected.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers().map_or(0, NonZeroUsize::get))
        .build()?;

    pool.install(|| {
        selected
            .par_iter()
            .map(|entry| job::compress_file(entry.full_path(), options))
            .collect::<Result<Vec<_>, _>>()
    })
}
