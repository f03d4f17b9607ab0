//! Classifier for `key:value` dumps consumed by the transpose emitter.

use crate::utils::config::PAIR_SEPARATOR;

/// One classified line of key/value input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairLine<'a> {
    /// Empty after trimming; closes the block
    Blank,

    /// Exactly one separator; both sides kept verbatim
    Pair { key: &'a str, value: &'a str },

    /// No separator, or more than one
    Malformed,
}

/// Classify a single line of key/value input
///
/// **Public** - main entry point for key/value parsing
///
/// The line is trimmed on both ends, then split on `:`. Whitespace around
/// the separator is preserved, so `a: 1` yields the value `" 1"`.
pub fn classify_pair(line: &str) -> PairLine<'_> {
    let line = line.trim();

    if line.is_empty() {
        return PairLine::Blank;
    }

    let mut parts = line.split(PAIR_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => PairLine::Pair { key, value },
        _ => PairLine::Malformed,
    }
}
