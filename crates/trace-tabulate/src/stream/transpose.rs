//! Key/value-to-rows processor.

use super::processor::LineProcessor;
use crate::aggregator::PairBlock;
use crate::output::write_pair_rows;
use crate::parser::{classify_pair, PairLine};
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;

/// Transpose emitter for `key:value` dumps
///
/// **Public** - used by the `transpose` command
///
/// A blank line always writes the keys row, the values row and an empty
/// terminator, even when no pairs were collected. End-of-stream writes the
/// two rows without a terminator, and only if pairs are pending.
#[derive(Debug, Default)]
pub struct TransposeEmitter {
    block: PairBlock,
    blocks_emitted: usize,
}

impl TransposeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs accumulated since the last flush
    pub fn pending(&self) -> &PairBlock {
        &self.block
    }

    fn emit(&mut self, out: &mut dyn Write, terminate: bool) -> Result<(), OutputError> {
        let block = std::mem::take(&mut self.block);
        write_pair_rows(&block, out, terminate)?;
        self.blocks_emitted += 1;

        debug!(
            "Flushed transpose block #{} ({} pair(s))",
            self.blocks_emitted,
            block.len()
        );

        Ok(())
    }
}

impl LineProcessor for TransposeEmitter {
    fn process_line(&mut self, line: &str, out: &mut dyn Write) -> Result<(), OutputError> {
        match classify_pair(line) {
            PairLine::Blank => self.emit(out, true)?,
            PairLine::Pair { key, value } => {
                if !self.block.push(key, value) {
                    debug!("Dropping zero-valued key '{}'", key);
                }
            }
            PairLine::Malformed => debug!("Ignoring line: {:?}", line),
        }

        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> Result<(), OutputError> {
        if self.block.is_empty() {
            return Ok(());
        }

        self.emit(out, false)
    }

    fn blocks_emitted(&self) -> usize {
        self.blocks_emitted
    }
}
