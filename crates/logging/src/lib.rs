#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the line-oriented output primitives used by the
//! precompress pipeline. The build host hands the engine a sink accepting
//! plain text lines; this crate supplies that sink abstraction together
//! with the size formatting used by the report.
//!
//! # Design
//!
//! The crate exposes [`LineSink`], a lightweight wrapper around an
//! [`io::Write`](std::io::Write) implementor. Callers control whether
//! rendered lines end with a newline by selecting a [`LineMode`]. The
//! [`LogSink`] trait is the boundary the engine's reporter writes through,
//! so tests can collect lines into memory while production wires the sink
//! to stdout.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! Stream two lines into an in-memory buffer and inspect the output:
//!
//! ```
//! use logging::{LineSink, LogSink};
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.log("dist/app.css.gz  1.02 kB").unwrap();
//! sink.log("done").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 2);
//! ```

pub mod format;

use std::io::{self, Write};

/// Controls whether a [`LineSink`] appends a trailing newline when writing
/// lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each line.
    WithNewline,
    /// Emit the line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

/// Destination for the plain text lines the pipeline emits.
///
/// The engine's reporter only ever appends whole lines, so the trait stays
/// minimal; any [`io::Write`] target can participate through [`LineSink`].
pub trait LogSink {
    /// Appends one line of output.
    fn log(&mut self, line: &str) -> io::Result<()>;
}

/// Streaming sink that renders text lines into an [`io::Write`] target.
///
/// The sink owns the underlying writer. Each call to
/// [`log`](LogSink::log) writes the line using the configured
/// [`LineMode`]; the default appends a newline per line, matching the
/// line-oriented output a build host expects.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`]:
///
/// ```
/// use logging::{LineSink, LogSink};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.log("first").unwrap();
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "first\n");
/// ```
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
    line_mode: LineMode,
}

impl<W: Write> LineSink<W> {
    /// Creates a sink that appends a newline after every line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with an explicit [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the configured line mode.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Provides access to the wrapped writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps the sink, returning the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> LogSink for LineSink<W> {
    fn log(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, line: &str) -> io::Result<()> {
        (**self).log(line)
    }
}
