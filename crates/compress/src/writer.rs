//! Byte-counting passthrough writer.

use std::io::{self, Write};

/// Writer adapter that counts the bytes flowing through it.
///
/// The compressed size of a stream is measured here, as the compressor
/// produces output, rather than reconstructed from the written file
/// afterwards.
#[derive(Debug)]
pub struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    /// Wraps `inner`, starting the count at zero.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Provides access to the wrapped writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwraps the adapter, returning the inner writer and the byte count.
    #[must_use]
    pub fn into_parts(self) -> (W, u64) {
        (self.inner, self.bytes)
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(written as u64);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
