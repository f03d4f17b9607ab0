//! CSV rendering for histogram tables and transposed pairs.

use crate::aggregator::{BlockTable, BucketRow, PairBlock};
use crate::utils::config::{FIELD_SEPARATOR, HEADER_PREFIX};
use crate::utils::error::OutputError;
use std::io::Write;

/// Write a histogram table followed by an empty terminator line, then flush
///
/// **Public** - main entry point for histogram output
///
/// # Output
/// ```text
/// time,bucket,cpu,mem
/// 2024-01-01 12:00:00,5,10,5
/// 2024-01-01 12:00:00,6,20,0
///
/// ```
///
/// # Errors
/// * `OutputError::WriteFailed` - the sink rejected a write
/// * `OutputError::FlushFailed` - the sink could not be flushed
pub fn write_block_table<W: Write + ?Sized>(
    table: &BlockTable,
    out: &mut W,
) -> Result<(), OutputError> {
    writeln!(out, "{}", header_line(&table.labels))?;

    for row in &table.rows {
        writeln!(out, "{}", row_line(&table.timestamp, row))?;
    }

    writeln!(out)?;

    flush_sink(out)
}

/// Header row: `time,bucket,` followed by the labels
pub fn header_line(labels: &[String]) -> String {
    format!(
        "{}{}{}",
        HEADER_PREFIX,
        FIELD_SEPARATOR,
        labels.join(FIELD_SEPARATOR)
    )
}

/// Data row: timestamp, bucket, then one value per label
pub fn row_line(timestamp: &str, row: &BucketRow) -> String {
    let mut fields = Vec::with_capacity(row.values.len() + 2);
    fields.push(timestamp.to_string());
    fields.push(row.bucket.to_string());
    fields.extend(row.values.iter().map(u128::to_string));

    fields.join(FIELD_SEPARATOR)
}

/// Write the keys row and the values row of a pair block, then flush
///
/// **Public** - main entry point for transpose output
///
/// # Arguments
/// * `block` - Pairs to emit; may be empty, yielding two empty rows
/// * `out` - Output sink
/// * `terminate` - Whether to follow the rows with an empty line
pub fn write_pair_rows<W: Write + ?Sized>(
    block: &PairBlock,
    out: &mut W,
    terminate: bool,
) -> Result<(), OutputError> {
    writeln!(out, "{}", block.keys().join(FIELD_SEPARATOR))?;
    writeln!(out, "{}", block.values().join(FIELD_SEPARATOR))?;

    if terminate {
        writeln!(out)?;
    }

    flush_sink(out)
}

/// Force buffered output through to the consumer
pub fn flush_sink<W: Write + ?Sized>(out: &mut W) -> Result<(), OutputError> {
    out.flush().map_err(OutputError::FlushFailed)
}
