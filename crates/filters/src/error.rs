use std::fmt;

/// Error produced when a pattern cannot be compiled into a matcher.
#[derive(Debug)]
pub struct MatcherError {
    pattern: String,
    source: globset::Error,
}

impl MatcherError {
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile match pattern '{}': {}",
            self.pattern, self.source
        )
    }
}

impl std::error::Error for MatcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
