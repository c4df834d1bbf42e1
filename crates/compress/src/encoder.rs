//! Algorithm-dispatching encoder driven by the engine's write loop.

use std::io::{self, Write};

use crate::algorithm::CompressionAlgorithm;
use crate::brotli::CountingBrotliEncoder;
use crate::deflate::CountingDeflateEncoder;
use crate::gzip::CountingGzipEncoder;
use crate::level::CompressionLevel;

/// Streaming encoder over any supported algorithm.
///
/// Wraps the per-algorithm counting encoders behind one write/finish
/// surface so callers select the algorithm at runtime without changing
/// their I/O loop.
pub enum Encoder<W: Write> {
    /// Gzip-framed DEFLATE stream.
    Gzip(CountingGzipEncoder<W>),
    /// Zlib-framed DEFLATE stream.
    Deflate(CountingDeflateEncoder<W>),
    /// Brotli stream.
    Brotli(Box<CountingBrotliEncoder<W>>),
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder for `algorithm` writing compressed output into
    /// `sink`.
    #[must_use]
    pub fn new(algorithm: CompressionAlgorithm, level: CompressionLevel, sink: W) -> Self {
        match algorithm {
            CompressionAlgorithm::Gzip => Self::Gzip(CountingGzipEncoder::new(sink, level)),
            CompressionAlgorithm::Deflate => {
                Self::Deflate(CountingDeflateEncoder::new(sink, level))
            }
            CompressionAlgorithm::Brotli => {
                Self::Brotli(Box::new(CountingBrotliEncoder::new(sink, level)))
            }
        }
    }

    /// Appends data to the compression stream.
    pub fn write(&mut self, input: &[u8]) -> io::Result<()> {
        match self {
            Self::Gzip(encoder) => encoder.write(input),
            Self::Deflate(encoder) => encoder.write(input),
            Self::Brotli(encoder) => encoder.write(input),
        }
    }

    /// Returns the number of compressed bytes produced so far without
    /// finalising the stream.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        match self {
            Self::Gzip(encoder) => encoder.bytes_written(),
            Self::Deflate(encoder) => encoder.bytes_written(),
            Self::Brotli(encoder) => encoder.bytes_written(),
        }
    }

    /// Completes the stream, returning the sink and the total number of
    /// compressed bytes generated.
    pub fn finish(self) -> io::Result<(W, u64)> {
        match self {
            Self::Gzip(encoder) => encoder.finish(),
            Self::Deflate(encoder) => encoder.finish(),
            Self::Brotli(encoder) => encoder.finish(),
        }
    }
}

/// Decompresses `input` with the decoder matching `algorithm`.
///
/// Intended for hosts and tests verifying that produced siblings restore
/// the original bytes.
pub fn decompress_to_vec(algorithm: CompressionAlgorithm, input: &[u8]) -> io::Result<Vec<u8>> {
    match algorithm {
        CompressionAlgorithm::Gzip => crate::gzip::decompress_to_vec(input),
        CompressionAlgorithm::Deflate => crate::deflate::decompress_to_vec(input),
        CompressionAlgorithm::Brotli => crate::brotli::decompress_to_vec(input),
    }
}
