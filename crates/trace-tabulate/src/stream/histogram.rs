//! Histogram-to-table processor.
//!
//! Samples accumulate under the current label until a blank line, at which
//! point the block is written as one CSV table and replaced with a fresh one.

use super::clock::{Clock, LocalClock};
use super::processor::LineProcessor;
use crate::aggregator::BlockState;
use crate::output::write_block_table;
use crate::parser::{classify_line, HistogramLine};
use crate::utils::error::OutputError;
use log::{debug, warn};
use std::io::Write;

/// Block aggregator for histogram tracer output
///
/// **Public** - used by the `aggregate` command
///
/// # Example
/// ```
/// use trace_tabulate::stream::{HistogramTabulator, LineProcessor};
///
/// let mut tabulator = HistogramTabulator::with_clock(|| "2024-01-01 00:00:00".to_string());
/// let mut out: Vec<u8> = Vec::new();
///
/// for line in ["^cpu", "  5 |@@ 10", ""] {
///     tabulator.process_line(line, &mut out).unwrap();
/// }
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "time,bucket,cpu\n2024-01-01 00:00:00,5,10\n\n"
/// );
/// ```
#[derive(Debug)]
pub struct HistogramTabulator<C = LocalClock> {
    clock: C,

    /// Label for incoming samples; survives flushes
    current_label: String,

    block: BlockState,

    blocks_emitted: usize,
}

impl HistogramTabulator<LocalClock> {
    /// Create a tabulator stamping blocks with local wall-clock time
    pub fn new() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl Default for HistogramTabulator<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> HistogramTabulator<C> {
    /// Create a tabulator with a custom timestamp source
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            current_label: String::new(),
            block: BlockState::new(),
            blocks_emitted: 0,
        }
    }

    /// Label that the next sample line will be recorded under
    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    /// Samples accumulated since the last flush
    pub fn pending(&self) -> &BlockState {
        &self.block
    }

    /// Write the pending block, if it has any labels, and start a new one
    fn flush_block(&mut self, out: &mut dyn Write) -> Result<(), OutputError> {
        if self.block.is_empty() {
            debug!("Blank line with no labels recorded, nothing to flush");
            return Ok(());
        }

        let timestamp = self.clock.timestamp();
        let table = std::mem::take(&mut self.block).into_table(timestamp);

        write_block_table(&table, out)?;
        self.blocks_emitted += 1;

        debug!(
            "Flushed histogram block #{} ({} label(s), {} bucket(s))",
            self.blocks_emitted,
            table.labels.len(),
            table.rows.len()
        );

        Ok(())
    }
}

impl<C: Clock> LineProcessor for HistogramTabulator<C> {
    fn process_line(&mut self, line: &str, out: &mut dyn Write) -> Result<(), OutputError> {
        match classify_line(line) {
            HistogramLine::Blank => self.flush_block(out)?,
            HistogramLine::Label(label) => {
                self.current_label = label.to_string();
                self.block.start_series(label);
            }
            HistogramLine::Sample { bucket, value } => {
                self.block.record(&self.current_label, bucket, value);
            }
            HistogramLine::Unrecognized => debug!("Ignoring line: {:?}", line),
        }

        Ok(())
    }

    /// Undelimited samples at end-of-stream are discarded, not flushed
    fn finish(&mut self, _out: &mut dyn Write) -> Result<(), OutputError> {
        if !self.block.is_empty() {
            warn!(
                "Input ended without a closing blank line; dropping partial block ({} label(s), {} bucket(s))",
                self.block.label_count(),
                self.block.bucket_count()
            );
            self.block = BlockState::new();
        }

        Ok(())
    }

    fn blocks_emitted(&self) -> usize {
        self.blocks_emitted
    }
}
