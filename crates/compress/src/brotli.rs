//! # Overview
//!
//! Brotli helpers built on the [`brotli`](https://docs.rs/brotli) crate,
//! mirroring the encoder shape of [`crate::gzip`] so the engine can drive
//! every algorithm through the same write loop. Quality is derived from the
//! shared [`CompressionLevel`] scale via
//! [`CompressionLevel::brotli_quality`].

use std::io::{self, Read, Write};

use brotli::{CompressorWriter, Decompressor};

use crate::level::CompressionLevel;
use crate::writer::CountingWriter;

/// Internal buffer size handed to the brotli encoder and decoder.
const BROTLI_BUFFER_SIZE: usize = 4096;

/// Window size (log2) used for encoding; 22 is the encoder's conventional
/// maximum for general-purpose payloads.
const BROTLI_LG_WINDOW_SIZE: u32 = 22;

/// Streaming brotli encoder that records the number of compressed bytes
/// written to the wrapped sink.
pub struct CountingBrotliEncoder<W: Write> {
    inner: CompressorWriter<CountingWriter<W>>,
}

impl<W: Write> CountingBrotliEncoder<W> {
    /// Creates an encoder writing compressed output into `sink`.
    #[must_use]
    pub fn new(sink: W, level: CompressionLevel) -> Self {
        Self {
            inner: CompressorWriter::new(
                CountingWriter::new(sink),
                BROTLI_BUFFER_SIZE,
                level.brotli_quality(),
                BROTLI_LG_WINDOW_SIZE,
            ),
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
    /// compressed bytes generated.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        // Push pending input through before unwrapping; the final stream
        // terminator is emitted by into_inner.
        self.inner.flush()?;
        let writer = self.inner.into_inner();
        Ok(writer.into_parts())
    }
}

/// Compresses `input` into a new [`Vec`].
pub fn compress_to_vec(input: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
    let mut encoder = CountingBrotliEncoder::new(Vec::new(), level);
    encoder.write(input)?;
    let (sink, _) = encoder.finish()?;
    Ok(sink)
}

/// Decompresses `input` into a new [`Vec`].
pub fn decompress_to_vec(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = Decompressor::new(input, BROTLI_BUFFER_SIZE);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
