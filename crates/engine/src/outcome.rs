use std::path::PathBuf;

/// Record of one completed compression.
///
/// Byte counts are measured while streaming: the uncompressed total is the
/// number of bytes read from the source, the compressed total the number of
/// bytes the compressor emitted, trailer included.
#[derive(Clone, Debug)]
pub struct CompressionOutcome {
    /// Source file that was compressed.
    pub source_path: PathBuf,
    /// Compressed sibling written next to the source.
    pub output_path: PathBuf,
    /// Bytes read from the source.
    pub uncompressed_bytes: u64,
    /// Bytes emitted by the compressor.
    pub compressed_bytes: u64,
}
