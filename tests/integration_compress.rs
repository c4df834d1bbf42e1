//! End-to-end coverage of the precompress pipeline: discovery, filtering,
//! concurrent compression, byte accounting, and reporting.

use std::fs;
use std::path::{Path, PathBuf};

use engine::{CompressOptions, EngineError, run};
use filters::Matcher;
use logging::LineSink;

use compress::{CompressionAlgorithm, decompress_to_vec};

/// Runs the engine against `root`, returning the report lines.
fn run_collecting(root: &Path, options: &CompressOptions) -> Result<Vec<String>, EngineError> {
    let mut sink = LineSink::new(Vec::new());
    run(root, options, &mut sink)?;
    let output = String::from_utf8(sink.into_inner()).expect("report is utf8");
    Ok(output.lines().map(str::to_owned).collect())
}

/// Every file created beneath `root` carrying one of the compression
/// suffixes.
fn compressed_files(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).expect("read_dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("gz" | "zz" | "br")
            ) {
                found.push(path);
            }
        }
    }
    found.sort();
    found
}

#[test]
fn scenario_compresses_only_matching_files_above_threshold() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("a.css"), vec![b'a'; 2000]).expect("write");
    fs::write(temp.path().join("b.png"), vec![b'b'; 2000]).expect("write");
    fs::write(temp.path().join("c.js"), vec![b'c'; 500]).expect("write");

    let lines = run_collecting(temp.path(), &CompressOptions::default()).expect("run");

    assert_eq!(
        compressed_files(temp.path()),
        vec![temp.path().join("a.css.gz")]
    );
    // One per-file line plus the summary.
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("a.css.gz"));
    assert!(lines[1].contains("compressed 1 file"));
}

#[test]
fn produced_siblings_round_trip_for_every_algorithm() {
    for &algorithm in CompressionAlgorithm::available() {
        let temp = tempfile::tempdir().expect("tempdir");
        let payload = b"const answer = 42; // repeated for compressibility\n".repeat(80);
        let source = temp.path().join("bundle.js");
        fs::write(&source, &payload).expect("write");

        let options = CompressOptions::default().with_algorithm(algorithm);
        run_collecting(temp.path(), &options).expect("run");

        let sibling = temp
            .path()
            .join(format!("bundle.js.{}", algorithm.suffix()));
        let compressed = fs::read(&sibling).expect("sibling exists");
        let restored = decompress_to_vec(algorithm, &compressed).expect("decompress");
        assert_eq!(restored, payload, "{algorithm} round trip");
    }
}

#[test]
fn output_path_is_source_path_plus_suffix() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("dir")).expect("mkdir");
    fs::write(temp.path().join("dir/app.js"), vec![b'x'; 2048]).expect("write");

    run_collecting(temp.path(), &CompressOptions::default()).expect("run");

    assert!(temp.path().join("dir/app.js.gz").exists());
    assert_eq!(
        compressed_files(temp.path()),
        vec![temp.path().join("dir/app.js.gz")]
    );
}

#[test]
fn files_below_threshold_are_never_compressed() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("small.css"), vec![b'x'; 1023]).expect("write");
    fs::write(temp.path().join("exact.css"), vec![b'x'; 1024]).expect("write");

    run_collecting(temp.path(), &CompressOptions::default()).expect("run");

    assert_eq!(
        compressed_files(temp.path()),
        vec![temp.path().join("exact.css.gz")]
    );
}

#[test]
fn non_matching_paths_are_never_compressed_regardless_of_size() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("huge.bin"), vec![b'x'; 1 << 20]).expect("write");

    let lines = run_collecting(temp.path(), &CompressOptions::default()).expect("run");

    assert!(compressed_files(temp.path()).is_empty());
    assert!(lines.is_empty());
}

#[test]
fn empty_subdirectories_are_discovered_but_never_compressed() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("empty")).expect("mkdir");
    fs::write(temp.path().join("app.css"), vec![b'x'; 2048]).expect("write");

    run_collecting(temp.path(), &CompressOptions::default()).expect("run");

    assert_eq!(
        compressed_files(temp.path()),
        vec![temp.path().join("app.css.gz")]
    );
    assert!(temp.path().join("empty").is_dir());
}

#[test]
fn empty_input_directory_produces_no_output_and_no_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lines = run_collecting(temp.path(), &CompressOptions::default()).expect("run");
    assert!(lines.is_empty());
    assert!(compressed_files(temp.path()).is_empty());
}

#[test]
fn missing_root_is_a_quiet_no_op() {
    let temp = tempfile::tempdir().expect("tempdir");
    let lines = run_collecting(&temp.path().join("never-built"), &CompressOptions::default())
        .expect("run");
    assert!(lines.is_empty());
}

#[test]
fn failing_write_aborts_reporting_for_the_whole_batch() {
    let temp = tempfile::tempdir().expect("tempdir");
    for name in ["a.css", "b.css", "c.css"] {
        fs::write(temp.path().join(name), vec![b'x'; 2048]).expect("write");
    }
    // A directory squatting on one output path makes that write fail.
    fs::create_dir(temp.path().join("b.css.gz")).expect("block output");

    let mut sink = LineSink::new(Vec::new());
    let error = run(temp.path(), &CompressOptions::default(), &mut sink)
        .expect_err("batch must fail");

    assert!(matches!(error, EngineError::Write { .. }));
    // No outcomes reach the reporter, even for siblings that finished.
    assert!(sink.into_inner().is_empty());
    assert!(temp.path().join("b.css.gz").is_dir());
}

#[test]
fn predicate_matcher_selects_on_metadata_not_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("big.png"), vec![b'x'; 4096]).expect("write");
    fs::write(temp.path().join("small.png"), vec![b'x'; 512]).expect("write");

    let options = CompressOptions::default()
        .with_matcher(Matcher::predicate(|candidate| {
            !candidate.is_dir() && candidate.size() >= 1024
        }))
        .with_min_size(0);
    run_collecting(temp.path(), &options).expect("run");

    assert_eq!(
        compressed_files(temp.path()),
        vec![temp.path().join("big.png.gz")]
    );
}

#[test]
fn quiet_run_still_writes_siblings() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.css"), vec![b'x'; 2048]).expect("write");

    let options = CompressOptions::default().with_verbose(false);
    let lines = run_collecting(temp.path(), &options).expect("run");

    assert!(lines.is_empty());
    assert!(temp.path().join("app.css.gz").exists());
}

#[test]
fn suffix_override_renames_every_sibling() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.css"), vec![b'x'; 2048]).expect("write");

    let options = CompressOptions::default().with_output_suffix("gzip");
    run_collecting(temp.path(), &options).expect("run");

    assert!(temp.path().join("app.css.gzip").exists());
    assert!(!temp.path().join("app.css.gz").exists());
}

#[test]
fn zero_byte_files_compress_when_threshold_allows() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("empty.js"), b"").expect("write");

    let options = CompressOptions::default().with_min_size(0);
    let lines = run_collecting(temp.path(), &options).expect("run");

    let sibling = temp.path().join("empty.js.gz");
    let compressed = fs::read(&sibling).expect("sibling exists");
    // Format framing only, but a valid stream restoring zero bytes.
    assert!(!compressed.is_empty());
    let restored = decompress_to_vec(CompressionAlgorithm::Gzip, &compressed).expect("decompress");
    assert!(restored.is_empty());
    assert!(lines.iter().any(|line| line.contains("empty.js.gz")));
}

#[test]
fn sources_are_left_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let payload = vec![b'x'; 2048];
    fs::write(temp.path().join("app.css"), &payload).expect("write");

    run_collecting(temp.path(), &CompressOptions::default()).expect("run");

    assert_eq!(fs::read(temp.path().join("app.css")).expect("read"), payload);
}
