use std::num::NonZeroUsize;

use compress::{CompressionAlgorithm, CompressionLevel};
use filters::{DEFAULT_MIN_SIZE, Eligibility, Matcher};

/// Configuration for one precompression run.
///
/// Callers start from [`CompressOptions::default`] and override selectively
/// with the builder methods; the host merges its own configuration over
/// these defaults and nothing else is parsed at this layer.
#[derive(Clone, Debug)]
pub struct CompressOptions {
    matcher: Matcher,
    min_size: u64,
    algorithm: CompressionAlgorithm,
    level: CompressionLevel,
    output_suffix: Option<String>,
    verbose: bool,
    workers: Option<NonZeroUsize>,
}

impl CompressOptions {
    /// Creates options with the documented defaults: web-asset matcher,
    /// 1024-byte minimum, gzip at the default level, derived suffix,
    /// verbose reporting, and a worker pool sized to the machine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::web_assets(),
            min_size: DEFAULT_MIN_SIZE,
            algorithm: CompressionAlgorithm::default(),
            level: CompressionLevel::default(),
            output_suffix: None,
            verbose: true,
            workers: None,
        }
    }

    /// Replaces the candidate matcher.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Sets the minimum source size, in bytes, below which files are
    /// skipped.
    #[must_use]
    pub const fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Selects the compression algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: CompressionAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Selects the compression level.
    #[must_use]
    pub const fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    /// Overrides the suffix appended to produce output paths.
    ///
    /// The suffix is taken without a leading dot; one is stripped if
    /// supplied so `"gzip"` and `".gzip"` agree.
    #[must_use]
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let suffix = match suffix.strip_prefix('.') {
            Some(stripped) => stripped.to_owned(),
            None => suffix,
        };
        self.output_suffix = Some(suffix);
        self
    }

    /// Enables or disables per-file and summary report lines.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fixes the worker pool size; `None` sizes the pool to the machine's
    /// available parallelism.
    #[must_use]
    pub const fn with_workers(mut self, workers: Option<NonZeroUsize>) -> Self {
        self.workers = workers;
        self
    }

    /// Returns the configured matcher.
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns the minimum source size in bytes.
    #[must_use]
    pub const fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Returns the selected algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> CompressionAlgorithm {
        self.algorithm
    }

    /// Returns the selected compression level.
    #[must_use]
    pub const fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Returns the explicit suffix override, if any.
    #[must_use]
    pub fn output_suffix(&self) -> Option<&str> {
        self.output_suffix.as_deref()
    }

    /// Returns whether report lines are enabled.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the fixed worker pool size, if any.
    #[must_use]
    pub const fn workers(&self) -> Option<NonZeroUsize> {
        self.workers
    }

    /// Returns the suffix that will be appended to source paths, either
    /// the explicit override or the algorithm's own.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.output_suffix
            .as_deref()
            .unwrap_or_else(|| self.algorithm.suffix())
    }

    /// Builds the eligibility check for this run.
    #[must_use]
    pub fn eligibility(&self) -> Eligibility {
        Eligibility::new(self.matcher.clone(), self.min_size)
    }
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self::new()
    }
}
