//! Compression effort selection shared by every algorithm.

use core::fmt;
use core::str::FromStr;
use std::num::NonZeroU8;

use flate2::Compression;

/// Compression levels recognised by the encoders.
///
/// Numeric levels follow the zlib scale (`1..=9`); the brotli encoder maps
/// them onto its own quality range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionLevel {
    /// Favour speed over compression ratio.
    Fast,
    /// Use the encoder's default balance between speed and ratio.
    Default,
    /// Favour the best possible compression ratio.
    Best,
    /// Use an explicit numeric level in the range `1..=9`.
    Precise(NonZeroU8),
}

impl CompressionLevel {
    /// Creates a [`CompressionLevel::Precise`] value from an explicit
    /// numeric level.
    ///
    /// The supplied `level` must fall within the inclusive range `1..=9`,
    /// mirroring zlib's accepted range.
    pub fn from_numeric(level: u32) -> Result<Self, CompressionLevelError> {
        if (1..=9).contains(&level) {
            let precise = NonZeroU8::new(level as u8).expect("validated non-zero level");
            Ok(Self::Precise(precise))
        } else {
            Err(CompressionLevelError::new(level))
        }
    }

    /// Constructs a [`CompressionLevel::Precise`] variant from the provided
    /// level.
    #[must_use]
    pub const fn precise(level: NonZeroU8) -> Self {
        Self::Precise(level)
    }

    /// Returns the brotli quality equivalent of this level.
    ///
    /// Brotli accepts `0..=11`; `Best` selects the maximum while numeric
    /// levels carry over unchanged.
    #[must_use]
    pub const fn brotli_quality(self) -> u32 {
        match self {
            Self::Fast => 1,
            Self::Default => 6,
            Self::Best => 11,
            Self::Precise(value) => value.get() as u32,
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::Default
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Best => Compression::best(),
            CompressionLevel::Precise(value) => Compression::new(u32::from(value.get())),
        }
    }
}

/// Error returned when a requested compression level falls outside the
/// permissible numeric range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompressionLevelError {
    level: u32,
}

impl CompressionLevelError {
    const fn new(level: u32) -> Self {
        Self { level }
    }

    /// Returns the invalid compression level that triggered the error.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }
}

impl fmt::Display for CompressionLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "compression level {} is outside the supported range 1-9",
            self.level
        )
    }
}

impl std::error::Error for CompressionLevelError {}

/// Error returned when a compression level string cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompressionLevelParseError {
    input: String,
}

impl CompressionLevelParseError {
    fn new(input: impl Into<String>) -> Self {
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

impl fmt::Display for CompressionLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid compression level '{}': expected fast, default, best, or 1-9",
            self.input
        )
    }
}

impl std::error::Error for CompressionLevelParseError {}

impl FromStr for CompressionLevel {
    type Err = CompressionLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            other => {
                let numeric: u32 = other
                    .parse()
                    .map_err(|_| CompressionLevelParseError::new(trimmed))?;
                Self::from_numeric(numeric)
                    .map_err(|_| CompressionLevelParseError::new(trimmed))
            }
        }
    }
}
