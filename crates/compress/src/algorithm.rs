//! Shared enumeration describing the compression algorithms the pipeline
//! can apply to build output.

use core::fmt;
use core::str::FromStr;

/// Compression algorithms recognised by the workspace.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CompressionAlgorithm {
    /// RFC 1952 gzip framing over DEFLATE.
    Gzip,
    /// RFC 1950 zlib framing over DEFLATE (the `.zz` sibling convention).
    Deflate,
    /// Brotli (RFC 7932).
    Brotli,
}

impl CompressionAlgorithm {
    /// Returns the canonical display name used for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CompressionAlgorithm::Gzip => "gzip",
            CompressionAlgorithm::Deflate => "deflate",
            CompressionAlgorithm::Brotli => "brotli",
        }
    }

    /// Returns the file-name suffix appended to a compressed sibling,
    /// without the leading dot.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            CompressionAlgorithm::Gzip => "gz",
            CompressionAlgorithm::Deflate => "zz",
            CompressionAlgorithm::Brotli => "br",
        }
    }

    /// Returns the algorithm used when the caller does not pick one.
    #[must_use]
    pub const fn default_algorithm() -> Self {
        CompressionAlgorithm::Gzip
    }

    /// Returns the set of algorithms available in the current build.
    #[must_use]
    pub const fn available() -> &'static [CompressionAlgorithm] {
        &[
            CompressionAlgorithm::Gzip,
            CompressionAlgorithm::Deflate,
            CompressionAlgorithm::Brotli,
        ]
    }
}

impl Default for CompressionAlgorithm {
    fn default() -> Self {
        Self::default_algorithm()
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when attempting to parse an unsupported compression
/// algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompressionAlgorithmParseError {
    input: String,
}

impl CompressionAlgorithmParseError {
    /// Creates a parse error capturing the original input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the invalid input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for CompressionAlgorithmParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported compression algorithm: {}", self.input)
    }
}

impl std::error::Error for CompressionAlgorithmParseError {}

impl FromStr for CompressionAlgorithm {
    type Err = CompressionAlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gzip" | "gz" => Ok(CompressionAlgorithm::Gzip),
            "deflate" | "zlib" | "zz" => Ok(CompressionAlgorithm::Deflate),
            "brotli" | "br" => Ok(CompressionAlgorithm::Brotli),
            other => Err(CompressionAlgorithmParseError::new(other.to_string())),
        }
    }
}
