use crate::candidate::Candidate;
use crate::error::MatcherError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::fmt;
use std::sync::Arc;

/// Glob covering the asset types worth precompressing by default.
const WEB_ASSET_GLOB: &str = "*.{html,css,js,json,mjs}";

type Predicate = dyn Fn(&Candidate<'_>) -> bool + Send + Sync;

/// Decides whether a candidate's path marks it for compression.
///
/// A matcher is either a compiled glob set tested against the full path
/// string (case-insensitive, `*` crosses directory separators) or an
/// arbitrary predicate over the whole [`Candidate`]. Both forms are cheap
/// to clone and safe to share across worker threads.
#[derive(Clone)]
pub struct Matcher {
    kind: MatcherKind,
}

#[derive(Clone)]
enum MatcherKind {
    Globs {
        set: GlobSet,
        patterns: Vec<String>,
    },
    Predicate(Arc<Predicate>),
}

impl Matcher {
    /// Compiles a single glob pattern into a matcher.
    pub fn glob(pattern: &str) -> Result<Self, MatcherError> {
        Self::globs([pattern])
    }

    /// Compiles a set of glob patterns into a matcher.
    ///
    /// The candidate matches when any pattern matches. Patterns are
    /// case-insensitive and match anywhere in the path, so `*.css` accepts
    /// `dist/assets/site.css`.
    pub fn globs<I, S>(patterns: I) -> Result<Self, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .literal_separator(false)
                .build()
                .map_err(|source| MatcherError::new(pattern.to_string(), source))?;
            builder.add(glob);
            compiled.push(pattern.to_string());
        }
        let set = builder
            .build()
            .map_err(|source| MatcherError::new(compiled.join(","), source))?;
        Ok(Self {
            kind: MatcherKind::Globs {
                set,
                patterns: compiled,
            },
        })
    }

    /// Wraps an arbitrary predicate over the full candidate.
    ///
    /// Unlike globs, a predicate sees the size and directory flag, so it can
    /// select by metadata rather than by name alone.
    #[must_use]
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Candidate<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: MatcherKind::Predicate(Arc::new(predicate)),
        }
    }

    /// Returns the default matcher covering common static web assets
    /// (`html`, `css`, `js`, `json`, `mjs`).
    #[must_use]
    pub fn web_assets() -> Self {
        Self::glob(WEB_ASSET_GLOB).expect("default web asset glob compiles")
    }

    /// Tests the candidate against the matcher.
    #[must_use]
    pub fn is_match(&self, candidate: &Candidate<'_>) -> bool {
        let matched = match &self.kind {
            MatcherKind::Globs { set, .. } => set.is_match(candidate.path()),
            MatcherKind::Predicate(predicate) => predicate(candidate),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "precompress::filters",
            path = %candidate.path().display(),
            matched,
            "match_candidate"
        );

        matched
    }

    /// Returns the glob patterns backing this matcher, if it is glob-based.
    #[must_use]
    pub fn patterns(&self) -> Option<&[String]> {
        match &self.kind {
            MatcherKind::Globs { patterns, .. } => Some(patterns),
            MatcherKind::Predicate(_) => None,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::web_assets()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MatcherKind::Globs { patterns, .. } => {
                f.debug_tuple("Matcher::Globs").field(patterns).finish()
            }
            MatcherKind::Predicate(_) => f.write_str("Matcher::Predicate"),
        }
    }
}
