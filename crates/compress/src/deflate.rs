//! # Overview
//!
//! Deflate helpers built on [`flate2`]. Output uses the zlib container
//! (RFC 1950), matching the `.zz` sibling convention used by static file
//! servers; the raw DEFLATE stream is never written bare.
//!
//! The shape mirrors [`crate::gzip`]: a counting streaming encoder plus
//! buffer-level convenience helpers.

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::level::CompressionLevel;
use crate::writer::CountingWriter;

/// Streaming deflate encoder that records the number of compressed bytes
/// written to the wrapped sink.
pub struct CountingDeflateEncoder<W: Write> {
    inner: ZlibEncoder<CountingWriter<W>>,
}

impl<W: Write> CountingDeflateEncoder<W> {
    /// Creates an encoder writing compressed output into `sink`.
    #[must_use]
    pub fn new(sink: W, level: CompressionLevel) -> Self {
        Self {
            inner: ZlibEncoder::new(CountingWriter::new(sink), level.into()),
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
    /// compressed bytes generated (checksum trailer included).
    pub fn finish(self) -> io::Result<(W, u64)> {
        let writer = self.inner.finish()?;
        Ok(writer.into_parts())
    }
}

/// Compresses `input` into a new [`Vec`].
pub fn compress_to_vec(input: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), level.into());
    encoder.write_all(input)?;
    encoder.finish()
}

/// Decompresses `input` into a new [`Vec`].
pub fn decompress_to_vec(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(input);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_encoder_tracks_bytes() {
        let mut encoder = CountingDeflateEncoder::new(Vec::new(), CompressionLevel::Default);
        encoder.write(b"payload").expect("compress payload");
        let (sink, compressed) = encoder.finish().expect("finish stream");
        assert!(compressed > 0);
        assert_eq!(sink.len() as u64, compressed);
    }

    #[test]
    fn incremental_byte_reports_are_monotonic() {
        let mut encoder = CountingDeflateEncoder::new(Vec::new(), CompressionLevel::Default);
        assert_eq!(encoder.bytes_written(), 0);
        encoder.write(b"payload").expect("compress payload");
        let after_first = encoder.bytes_written();
        encoder.write(b"more payload").expect("compress payload");
        let after_second = encoder.bytes_written();
        assert!(after_second >= after_first);
        let (_, final_len) = encoder.finish().expect("finish stream");
        assert!(final_len >= after_second);
    }

    #[test]
    fn helper_functions_round_trip() {
        let payload = b"highly compressible payload".repeat(4);
        let compressed = compress_to_vec(&payload, CompressionLevel::Best).expect("compress");
        let decoded = decompress_to_vec(&compressed).expect("decompress");
        assert_eq!(decoded, payload);
    }
}
