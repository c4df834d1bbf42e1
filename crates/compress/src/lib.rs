#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `compress` exposes the compression primitives shared across the
//! precompress workspace: the algorithm and level selectors, streaming
//! encoders that count the bytes they emit, and decompression helpers used
//! to verify produced artifacts.
//!
//! # Design
//!
//! The crate provides one module per algorithm ([`gzip`], [`deflate`], and
//! [`brotli`]), each implementing a streaming-friendly counting encoder on
//! top of [`flate2`](https://docs.rs/flate2) or
//! [`brotli`](https://docs.rs/brotli). The [`Encoder`] enum dispatches over
//! the three so the engine can drive any algorithm through one write loop.
//! Compressed sizes are tracked by a [`CountingWriter`] as bytes are
//! produced by the compressor, never reconstructed from the output file
//! afterwards.
//!
//! # Invariants
//!
//! - Encoders write through to the caller-supplied sink; nothing is
//!   buffered beyond what the underlying compressor requires.
//! - Streams are finalised explicitly via [`Encoder::finish`], which emits
//!   trailer bytes and reports the final compressed length.
//! - Errors from the underlying compressors are surfaced as
//!   [`std::io::Error`] values.
//!
//! # Examples
//!
//! Compressing a buffer through the dispatching encoder and verifying the
//! round trip:
//!
//! ```
//! use compress::{CompressionAlgorithm, CompressionLevel, Encoder, decompress_to_vec};
//!
//! # fn main() -> std::io::Result<()> {
//! let data = b"streaming example payload";
//! let mut encoder = Encoder::new(
//!     CompressionAlgorithm::Gzip,
//!     CompressionLevel::Default,
//!     Vec::new(),
//! );
//! encoder.write(data)?;
//! let (compressed, compressed_len) = encoder.finish()?;
//! assert_eq!(compressed.len() as u64, compressed_len);
//!
//! let restored = decompress_to_vec(CompressionAlgorithm::Gzip, &compressed)?;
//! assert_eq!(restored, data);
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod brotli;
pub mod deflate;
mod encoder;
pub mod gzip;
mod level;
mod writer;

pub use algorithm::{CompressionAlgorithm, CompressionAlgorithmParseError};
pub use encoder::{Encoder, decompress_to_vec};
pub use level::{CompressionLevel, CompressionLevelError, CompressionLevelParseError};
pub use writer::CountingWriter;
