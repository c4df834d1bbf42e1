use crate::candidate::Candidate;
use crate::matcher::Matcher;

/// Files smaller than this are not worth the compression overhead.
pub const DEFAULT_MIN_SIZE: u64 = 1024;

/// Combined size-and-name selection applied to every discovered entry.
///
/// An entry is accepted when its size meets the threshold AND the matcher
/// accepts it. The check is a pure function of the candidate; it performs
/// no I/O and has no side effects.
#[derive(Clone, Debug)]
pub struct Eligibility {
    matcher: Matcher,
    min_size: u64,
}

impl Eligibility {
    /// Creates a selection from a matcher and a minimum size in bytes.
    #[must_use]
    pub const fn new(matcher: Matcher, min_size: u64) -> Self {
        Self { matcher, min_size }
    }

    /// Returns the configured matcher.
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns the minimum size threshold in bytes.
    #[must_use]
    pub const fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Decides whether the candidate should be compressed.
    #[must_use]
    pub fn accepts(&self, candidate: &Candidate<'_>) -> bool {
        candidate.size() >= self.min_size && self.matcher.is_match(candidate)
    }
}

impl Default for Eligibility {
    fn default() -> Self {
        Self::new(Matcher::web_assets(), DEFAULT_MIN_SIZE)
    }
}
