#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` wires the precompress pipeline together: it walks a build-output
//! directory, selects eligible files, compresses each one into a sibling
//! file on a bounded worker pool, and reports the savings through the
//! host's log sink.
//!
//! # Design
//!
//! - [`batch::collect_entries`] materialises the traversal in discovery
//!   order.
//! - [`batch::compress_all`] applies the eligibility filter and fans the
//!   survivors out across a fixed-size rayon pool; outcomes come back in
//!   discovery order regardless of completion order, and the first failure
//!   aborts the whole batch.
//! - [`job::compress_file`] streams one file through a counting encoder
//!   with both handles scoped by ownership.
//! - [`report::emit`] renders the column-aligned per-file lines and the
//!   aggregate summary.
//!
//! [`run`] composes the four; hosts that need finer control can call the
//! stages directly.
//!
//! # Errors
//!
//! Every failure funnels into [`EngineError`]. The run is all-or-nothing:
//! on error no report is written, although compressed siblings that other
//! workers had already finished remain on disk.
//!
//! # Examples
//!
//! Compress a directory with the defaults and collect the report lines in
//! memory:
//!
//! ```
//! use engine::{CompressOptions, run};
//! use logging::LineSink;
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("app.css"), "body{}".repeat(300))?;
//!
//! let mut sink = LineSink::new(Vec::new());
//! run(temp.path(), &CompressOptions::default(), &mut sink)?;
//!
//! assert!(temp.path().join("app.css.gz").exists());
//! let report = String::from_utf8(sink.into_inner())?;
//! assert!(report.contains("app.css.gz"));
//! # Ok(())
//! # }
//! ```

pub mod batch;
mod error;
pub mod job;
mod options;
mod outcome;
pub mod report;

pub use error::EngineError;
pub use options::CompressOptions;
pub use outcome::CompressionOutcome;

use logging::LogSink;
use std::path::Path;

/// Runs one precompression pass over `root`.
///
/// Discovers files, compresses every eligible one, and writes the report
/// through `sink`. Returns nothing on success; the side effects are the
/// compressed siblings on disk and the emitted log lines.
pub fn run<S: LogSink>(
    root: &Path,
    options: &CompressOptions,
    sink: &mut S,
) -> Result<(), EngineError> {
    let entries = batch::collect_entries(root)?;
    let outcomes = batch::compress_all(&entries, options)?;
    report::emit(&outcomes, root, options, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LineSink;
    use std::fs;

    #[test]
    fn run_compresses_and_reports() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("app.css"), "body{}".repeat(300)).expect("write");
        fs::write(temp.path().join("logo.png"), vec![0; 4096]).expect("write");

        let mut sink = LineSink::new(Vec::new());
        run(temp.path(), &CompressOptions::default(), &mut sink).expect("run");

        assert!(temp.path().join("app.css.gz").exists());
        assert!(!temp.path().join("logo.png.gz").exists());

        let report = String::from_utf8(sink.into_inner()).expect("utf8");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("app.css.gz"));
        assert!(lines[1].starts_with("compressed 1 file"));
    }

    #[test]
    fn run_on_missing_root_is_a_quiet_no_op() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut sink = LineSink::new(Vec::new());
        run(
            &temp.path().join("never-built"),
            &CompressOptions::default(),
            &mut sink,
        )
        .expect("run");
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn failed_run_reports_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        for name in ["a.css", "b.css", "c.css"] {
            fs::write(temp.path().join(name), vec![b'x'; 2048]).expect("write");
        }
        fs::create_dir(temp.path().join("b.css.gz")).expect("block output");

        let mut sink = LineSink::new(Vec::new());
        let error = run(temp.path(), &CompressOptions::default(), &mut sink)
            .expect_err("blocked batch");
        assert!(matches!(error, EngineError::Write { .. }));
        assert!(sink.into_inner().is_empty());
    }
}
