//! Classifier for histogram-style tracer output.
//!
//! Input looks like:
//!
//! ```text
//! ^cpu
//!      5 |@@ 10
//!      6 |@@@ 20
//!
//! ```
//!
//! Lines starting with `^` name the series that following samples belong
//! to, sample lines carry a bucket and a count, and a blank line closes
//! the block.

use crate::utils::config::{LABEL_MARKER, SAMPLE_PATTERN};
use regex::Regex;
use std::sync::OnceLock;

/// One classified line of histogram input
///
/// **Public** - produced by [`classify_line`], consumed by the tabulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramLine<'a> {
    /// Empty after trailing whitespace is stripped; closes the block
    Blank,

    /// `^<label>`; carries the text after the marker
    Label(&'a str),

    /// A histogram row with its bucket and count
    Sample { bucket: u128, value: u128 },

    /// Anything else (headers, zero-width rows, noise)
    Unrecognized,
}

fn sample_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(SAMPLE_PATTERN).expect("internal sample pattern must compile"))
}

/// Classify a single line of histogram input
///
/// **Public** - main entry point for histogram parsing
///
/// Trailing whitespace (including a stray `\r`) is stripped first.
/// Leading whitespace is significant only for sample lines, where it is
/// optional indentation.
///
/// # Example
/// ```
/// use trace_tabulate::parser::{classify_line, HistogramLine};
///
/// assert_eq!(classify_line("^cpu"), HistogramLine::Label("cpu"));
/// assert_eq!(
///     classify_line("     5 |@@ 10"),
///     HistogramLine::Sample { bucket: 5, value: 10 }
/// );
/// assert_eq!(classify_line("   \t"), HistogramLine::Blank);
/// ```
pub fn classify_line(line: &str) -> HistogramLine<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return HistogramLine::Blank;
    }

    if let Some(label) = line.strip_prefix(LABEL_MARKER) {
        return HistogramLine::Label(label);
    }

    match parse_sample(line) {
        Some((bucket, value)) => HistogramLine::Sample { bucket, value },
        None => HistogramLine::Unrecognized,
    }
}

/// Extract `(bucket, value)` from a sample line
///
/// **Public** - exposed for testing the sample grammar in isolation
///
/// Returns `None` when the line does not match, or when either digit run
/// does not fit in a `u128`.
pub fn parse_sample(line: &str) -> Option<(u128, u128)> {
    let caps = sample_regex().captures(line)?;

    let bucket = caps.get(1)?.as_str().parse::<u128>().ok()?;
    let value = caps.get(2)?.as_str().parse::<u128>().ok()?;

    Some((bucket, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_keeps_inner_whitespace() {
        assert_eq!(classify_line("^read bytes  "), HistogramLine::Label("read bytes"));
    }

    #[test]
    fn test_bare_marker_is_empty_label() {
        assert_eq!(classify_line("^"), HistogramLine::Label(""));
    }

    #[test]
    fn test_indented_marker_is_not_a_label() {
        assert_eq!(classify_line("  ^cpu"), HistogramLine::Unrecognized);
    }
}
