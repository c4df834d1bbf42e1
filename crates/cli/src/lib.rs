#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end for the precompress pipeline. It
//! parses flags, merges them over the engine's defaults, and runs one
//! compression pass against the given directory, streaming the report to
//! stdout.
//!
//! Exit codes: `0` on success, `1` when the run fails, `2` for usage
//! errors.

use std::ffi::OsString;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};

use compress::{CompressionAlgorithm, CompressionLevel};
use engine::CompressOptions;
use filters::Matcher;
use logging::LineSink;

const USAGE_ERROR: u8 = 2;
const RUN_ERROR: u8 = 1;

/// Parses `args` and runs the pipeline, writing the report to `stdout`
/// and diagnostics to `stderr`.
///
/// This is the entry point the `precompress` binary delegates to; tests
/// drive it with in-memory writers.
pub fn run_with<Args, A, Out, ErrOut>(
    args: Args,
    stdout: &mut Out,
    stderr: &mut ErrOut,
) -> ExitCode
where
    Args: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    ExitCode::from(run_impl(args, stdout, stderr))
}

fn run_impl<Args, A, Out, ErrOut>(args: Args, stdout: &mut Out, stderr: &mut ErrOut) -> u8
where
    Args: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    init_tracing();

    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{error}");
                    0
                }
                _ => {
                    let _ = write!(stderr, "{error}");
                    USAGE_ERROR
                }
            };
        }
    };

    let dir = matches
        .get_one::<String>("dir")
        .expect("required argument enforced by clap");

    let algorithm = match matches
        .get_one::<String>("algorithm")
        .expect("defaulted by clap")
        .parse::<CompressionAlgorithm>()
    {
        Ok(algorithm) => algorithm,
        Err(error) => {
            let _ = writeln!(stderr, "precompress: {error}");
            return USAGE_ERROR;
        }
    };

    let level = match matches.get_one::<String>("level") {
        Some(raw) => match raw.parse::<CompressionLevel>() {
            Ok(level) => level,
            Err(error) => {
                let _ = writeln!(stderr, "precompress: {error}");
                return USAGE_ERROR;
            }
        },
        None => CompressionLevel::default(),
    };

    let min_size = match matches
        .get_one::<String>("min-size")
        .expect("defaulted by clap")
        .parse::<u64>()
    {
        Ok(min_size) => min_size,
        Err(_) => {
            let _ = writeln!(stderr, "precompress: --min-size expects a byte count");
            return USAGE_ERROR;
        }
    };

    let workers = match matches.get_one::<String>("threads") {
        Some(raw) => match raw.parse::<usize>().ok().and_then(NonZeroUsize::new) {
            Some(workers) => Some(workers),
            None => {
                let _ = writeln!(stderr, "precompress: --threads expects a positive count");
                return USAGE_ERROR;
            }
        },
        None => None,
    };

    let mut options = CompressOptions::default()
        .with_algorithm(algorithm)
        .with_level(level)
        .with_min_size(min_size)
        .with_workers(workers)
        .with_verbose(!matches.get_flag("quiet"));

    if let Some(patterns) = matches.get_many::<String>("match") {
        match Matcher::globs(patterns) {
            Ok(matcher) => options = options.with_matcher(matcher),
            Err(error) => {
                let _ = writeln!(stderr, "precompress: {error}");
                return USAGE_ERROR;
            }
        }
    }

    if let Some(suffix) = matches.get_one::<String>("suffix") {
        options = options.with_output_suffix(suffix.clone());
    }

    let mut sink = LineSink::new(&mut *stdout);
    match engine::run(Path::new(dir), &options, &mut sink) {
        Ok(()) => {
            let _ = sink.flush();
            0
        }
        Err(error) => {
            let _ = writeln!(stderr, "precompress: {error}");
            RUN_ERROR
        }
    }
}

fn command() -> Command {
    Command::new("precompress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compress finished build output for static serving")
        .arg(
            Arg::new("dir")
                .value_name("DIR")
                .required(true)
                .help("Directory of built assets to compress"),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("NAME")
                .default_value("gzip")
                .help("Compression algorithm: gzip, deflate, or brotli"),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .value_name("LEVEL")
                .help("Compression effort: fast, default, best, or 1-9"),
        )
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .value_name("BYTES")
                .default_value("1024")
                .help("Skip files smaller than this many bytes"),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .value_name("GLOB")
                .action(ArgAction::Append)
                .help("Glob selecting candidate files (repeatable; replaces the default *.{html,css,js,json,mjs})"),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .value_name("EXT")
                .help("Override the suffix appended to compressed files"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("N")
                .help("Worker pool size (defaults to available parallelism)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Suppress per-file and summary output"),
        )
}

/// Installs the `RUST_LOG`-filtered subscriber once per process; later
/// calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
