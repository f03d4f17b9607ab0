//! Fixed input grammar and output format constants.
//!
//! Nothing here is configurable at runtime; both utilities accept exactly
//! one input grammar and produce exactly one CSV layout.

/// First character of a histogram label line (e.g. `^cpu`)
pub const LABEL_MARKER: char = '^';

/// Histogram sample line: optional indent, bucket digits, one whitespace,
/// `|`, a bar of `@`, whitespace, value digits.
///
/// Anything after the value digits is ignored.
pub const SAMPLE_PATTERN: &str = r"^\s*([0-9]+)\s\|@+\s+([0-9]+)";

/// Separator between key and value in transpose input (`key:value`)
pub const PAIR_SEPARATOR: char = ':';

/// Values equal to this literal are dropped by the transpose emitter
pub const FILTERED_VALUE: &str = "0";

/// Column separator for every emitted row
pub const FIELD_SEPARATOR: &str = ",";

/// Leading header columns of a histogram table, before the label columns
pub const HEADER_PREFIX: &str = "time,bucket";

/// Local-time format stamped on every row of a flushed histogram block
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
