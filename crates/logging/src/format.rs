//! Human-readable size rendering for report lines.

/// Renders a byte count as kilobytes with two decimal places.
///
/// Sizes are decimal kilobytes (`bytes / 1000`), matching how web build
/// tooling reports asset sizes.
///
/// # Examples
///
/// ```
/// use logging::format::kilobytes;
///
/// assert_eq!(kilobytes(0), "0.00 kB");
/// assert_eq!(kilobytes(1234), "1.23 kB");
/// assert_eq!(kilobytes(2000), "2.00 kB");
/// ```
#[must_use]
pub fn kilobytes(bytes: u64) -> String {
    format!("{:.2} kB", bytes as f64 / 1000.0)
}
