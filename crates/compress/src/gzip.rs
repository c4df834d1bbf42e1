//! # Overview
//!
//! Gzip helpers built on [`flate2`]. The module exposes a
//! [`CountingGzipEncoder`] that accepts incremental input while tracking the
//! number of compressed bytes produced, allowing higher layers to report
//! accurate sizes without buffering the payload in memory.
//!
//! # Examples
//!
//! Compress data incrementally into a sink and obtain the compressed length:
//!
//! ```
//! use compress::CompressionLevel;
//! use compress::gzip::CountingGzipEncoder;
//!
//! let mut encoder = CountingGzipEncoder::new(Vec::new(), CompressionLevel::Default);
//! encoder.write(b"payload").unwrap();
//! let (sink, compressed_len) = encoder.finish().unwrap();
//! assert_eq!(sink.len() as u64, compressed_len);
//! ```

use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::level::CompressionLevel;
use crate::writer::CountingWriter;

/// Streaming gzip encoder that records the number of compressed bytes
/// written to the wrapped sink.
pub struct CountingGzipEncoder<W: Write> {
    inner: GzEncoder<CountingWriter<W>>,
}

impl<W: Write> CountingGzipEncoder<W> {
    /// Creates an encoder writing compressed output into `sink`.
    #[must_use]
    pub fn new(sink: W, level: CompressionLevel) -> Self {
        Self {
            inner: GzEncoder::new(CountingWriter::new(sink), level.into()),
        }
    }

    /// Appends data to the compression stream.
    pub fn write(&mut self, input: &[u8]) -> io::Result<()> {
        self.inner.write_all(input)
    }

    /// Returns the number of compressed bytes produced so far without
    /// finalising the stream.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.inner.get_ref().bytes()
    }

    /// Completes the stream, returning the sink and the total number of
    /// compressed bytes generated (trailer included).
    pub fn finish(self) -> io::Result<(W, u64)> {
        let writer = self.inner.finish()?;
        Ok(writer.into_parts())
    }
}

/// Compresses `input` into a new [`Vec`].
pub fn compress_to_vec(input: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), level.into());
    encoder.write_all(input)?;
    encoder.finish()
}

/// Decompresses `input` into a new [`Vec`].
pub fn decompress_to_vec(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(input);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
