//! Single-file compression job.
//!
//! Streams one source file through the selected compressor into a sibling
//! output file, counting bytes on both sides as they move. File handles are
//! scoped by ownership, so both are released on every exit path. A failed
//! job may leave a partially written sibling behind; the batch layer treats
//! the whole run as failed and nothing is reported, so the partial file is
//! only ever overwritten by the next run.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use compress::Encoder;

use crate::error::EngineError;
use crate::options::CompressOptions;
use crate::outcome::CompressionOutcome;

/// Chunk size for the source read loop.
const CHUNK_SIZE: usize = 64 * 1024;

/// Derives the sibling output path: the source path with `.` and the
/// suffix appended.
///
/// The append is byte-preserving, so non-UTF-8 source names survive.
/// Distinct sources always map to distinct outputs because each output is
/// a strict extension of its source path.
#[must_use]
pub fn output_path(source: &Path, suffix: &str) -> PathBuf {
    let mut path = source.as_os_str().to_os_string();
    path.push(".");
    path.push(suffix);
    PathBuf::from(path)
}

/// Compresses `source` into its sibling output file.
///
/// A zero-byte source still produces an output (format framing only) and a
/// valid outcome with `uncompressed_bytes = 0`.
pub fn compress_file(
    source: &Path,
    options: &CompressOptions,
) -> Result<CompressionOutcome, EngineError> {
    let output = output_path(source, options.suffix());

    let mut reader = File::open(source).map_err(|error| EngineError::read(source, error))?;
    let sink = File::create(&output).map_err(|error| EngineError::write(&output, error))?;
    let mut encoder = Encoder::new(options.algorithm(), options.level(), sink);

    let mut buffer = vec![0_u8; CHUNK_SIZE];
    let mut uncompressed_bytes = 0_u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(EngineError::read(source, error)),
        };
        uncompressed_bytes += read as u64;
        encoder
            .write(&buffer[..read])
            .map_err(|error| EngineError::write(&output, error))?;
    }

    let (_sink, compressed_bytes) = encoder
        .finish()
        .map_err(|error| EngineError::write(&output, error))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "precompress::engine",
        source = %source.display(),
        uncompressed_bytes,
        compressed_bytes,
        "compressed_file"
    );

    Ok(CompressionOutcome {
        source_path: source.to_path_buf(),
        output_path: output,
        uncompressed_bytes,
        compressed_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use compress::{CompressionAlgorithm, decompress_to_vec};
    use std::fs;

    #[test]
    fn output_path_appends_suffix_to_full_name() {
        assert_eq!(
            output_path(Path::new("dist/app.js"), "gz"),
            PathBuf::from("dist/app.js.gz")
        );
        assert_eq!(
            output_path(Path::new("dist/styles/site.css"), "br"),
            PathBuf::from("dist/styles/site.css.br")
        );
    }

    #[test]
    fn compresses_file_and_counts_both_sides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.js");
        let payload = b"function main() { return 42; }\n".repeat(64);
        fs::write(&source, &payload).expect("write source");

        let options = CompressOptions::default();
        let outcome = compress_file(&source, &options).expect("compress");

        assert_eq!(outcome.source_path, source);
        assert_eq!(outcome.output_path, temp.path().join("app.js.gz"));
        assert_eq!(outcome.uncompressed_bytes, payload.len() as u64);

        let written = fs::read(&outcome.output_path).expect("read output");
        assert_eq!(written.len() as u64, outcome.compressed_bytes);
        let restored =
            decompress_to_vec(CompressionAlgorithm::Gzip, &written).expect("decompress");
        assert_eq!(restored, payload);
    }

    #[test]
    fn zero_byte_source_produces_outcome_and_framing_only_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("empty.css");
        fs::write(&source, b"").expect("write source");

        let options = CompressOptions::default();
        let outcome = compress_file(&source, &options).expect("compress");

        assert_eq!(outcome.uncompressed_bytes, 0);
        assert!(outcome.compressed_bytes > 0);
        assert!(outcome.output_path.exists());
    }

    #[test]
    fn missing_source_fails_with_read_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("vanished.css");

        let options = CompressOptions::default();
        let error = compress_file(&source, &options).expect_err("missing source");
        assert!(matches!(error, EngineError::Read { .. }));
    }

    #[test]
    fn unwritable_output_fails_with_write_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.css");
        fs::write(&source, b"x".repeat(2048)).expect("write source");
        // Occupy the output path with a directory so File::create fails.
        fs::create_dir(temp.path().join("app.css.gz")).expect("block output");

        let options = CompressOptions::default();
        let error = compress_file(&source, &options).expect_err("blocked output");
        assert!(matches!(error, EngineError::Write { .. }));
    }

    #[test]
    fn suffix_override_changes_output_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.css");
        fs::write(&source, b"x".repeat(2048)).expect("write source");

        let options = CompressOptions::default().with_output_suffix("gzip");
        let outcome = compress_file(&source, &options).expect("compress");
        assert_eq!(outcome.output_path, temp.path().join("app.css.gzip"));
    }
}
