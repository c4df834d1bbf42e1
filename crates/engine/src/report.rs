//! Report rendering for a completed batch.
//!
//! One column-aligned line per compressed file plus a summary of the
//! aggregate savings. Highlight colors key off the source extension, while
//! the printed name keeps the real on-disk sibling name. Nothing is
//! written when the batch is empty or the run is quiet.

use std::path::Path;

use console::style;
use logging::LogSink;
use logging::format::kilobytes;

use crate::error::EngineError;
use crate::options::CompressOptions;
use crate::outcome::CompressionOutcome;

/// Writes the per-file lines and the summary for `outcomes` through `sink`.
///
/// Display names are rendered relative to `root`, the directory the run
/// was invoked on.
pub fn emit<S: LogSink>(
    outcomes: &[CompressionOutcome],
    root: &Path,
    options: &CompressOptions,
    sink: &mut S,
) -> Result<(), EngineError> {
    if outcomes.is_empty() || !options.verbose() {
        return Ok(());
    }

    let rows: Vec<(String, String)> = outcomes
        .iter()
        .map(|outcome| {
            (
                display_name(outcome, root),
                kilobytes(outcome.compressed_bytes),
            )
        })
        .collect();

    // Widths come from the unstyled text; ANSI escapes would skew them.
    let name_width = rows.iter().map(|(name, _)| name.chars().count()).max();
    let name_width = name_width.unwrap_or(0);
    let size_width = rows.iter().map(|(_, size)| size.chars().count()).max();
    let size_width = size_width.unwrap_or(0);

    for (outcome, (name, size)) in outcomes.iter().zip(&rows) {
        let padded = format!("{name:<name_width$}");
        let line = format!(
            "  {}  {size:>size_width$}",
            highlight(&outcome.source_path, &padded)
        );
        sink.log(&line).map_err(EngineError::Report)?;
    }

    let total_in: u64 = outcomes.iter().map(|o| o.uncompressed_bytes).sum();
    let total_out: u64 = outcomes.iter().map(|o| o.compressed_bytes).sum();
    let summary = format!(
        "compressed {} {}: {} -> {} ({}% smaller)",
        outcomes.len(),
        if outcomes.len() == 1 { "file" } else { "files" },
        kilobytes(total_in),
        kilobytes(total_out),
        percent_saved(total_in, total_out),
    );
    sink.log(&summary).map_err(EngineError::Report)?;

    Ok(())
}

/// Renders the output path relative to the invocation root, keeping the
/// on-disk name (compression suffix included).
fn display_name(outcome: &CompressionOutcome, root: &Path) -> String {
    outcome
        .output_path
        .strip_prefix(root)
        .unwrap_or(&outcome.output_path)
        .display()
        .to_string()
}

/// Applies the extension-keyed highlight: the suffix-stripped source name
/// picks the rule, stylesheets and scripts each get their own color.
fn highlight(source_path: &Path, text: &str) -> String {
    match source_path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("css") => style(text).magenta().to_string(),
        Some("js") => style(text).cyan().to_string(),
        _ => style(text).green().to_string(),
    }
}

fn percent_saved(total_in: u64, total_out: u64) -> u64 {
    if total_in == 0 {
        0
    } else {
        total_in.saturating_sub(total_out) * 100 / total_in
    }
}
