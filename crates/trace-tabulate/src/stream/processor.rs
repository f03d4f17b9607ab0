//! The seam between the read loop and the two utilities.

use crate::utils::error::OutputError;
use std::io::Write;

/// A line-at-a-time transform that writes whole blocks to a sink
///
/// Implementations flush the sink themselves after every emitted block.
pub trait LineProcessor {
    /// Handle one input line, with its line terminator already removed
    fn process_line(&mut self, line: &str, out: &mut dyn Write) -> Result<(), OutputError>;

    /// Called once when the input ends normally (not on interrupt)
    fn finish(&mut self, out: &mut dyn Write) -> Result<(), OutputError>;

    /// Blocks written so far
    fn blocks_emitted(&self) -> usize;
}
