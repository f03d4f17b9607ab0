//! The read loop.
//!
//! Reading the next line is the only place the loop waits, and the only
//! place a shutdown request is noticed. On shutdown the sink is flushed and
//! the pending block is abandoned.

use super::processor::LineProcessor;
use crate::output::flush_sink;
use crate::utils::error::StreamError;
use log::{debug, info};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Outcome of one run over an input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    /// Lines handed to the processor
    pub lines_read: u64,

    /// Blocks the processor wrote
    pub blocks_emitted: usize,

    /// True if the run ended on shutdown rather than end-of-stream
    pub interrupted: bool,
}

impl StreamSummary {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Blocks: {} | Ended by: {}",
            self.lines_read,
            self.blocks_emitted,
            if self.interrupted { "interrupt" } else { "end of input" }
        )
    }
}

/// Feed every line of `reader` to `processor` until end-of-stream or shutdown
///
/// **Public** - main entry point for both utilities
///
/// # Arguments
/// * `reader` - Async line source; `\n` and `\r\n` terminators are stripped
/// * `out` - Output sink the processor writes blocks to
/// * `processor` - Histogram tabulator or transpose emitter
/// * `shutdown` - Resolves when the run should stop (e.g. Ctrl+C)
///
/// # Returns
/// Counts for the run. Shutdown is not an error.
///
/// # Errors
/// * `StreamError::ReadFailed` - the source failed (including invalid UTF-8)
/// * `StreamError::Output` - the sink failed
pub async fn run_stream<R, W, P, S>(
    reader: R,
    out: &mut W,
    processor: &mut P,
    shutdown: S,
) -> Result<StreamSummary, StreamError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    P: LineProcessor + ?Sized,
    S: Future<Output = ()>,
{
    let mut lines = reader.lines();
    let mut summary = StreamSummary::default();

    tokio::pin!(shutdown);

    loop {
        let next = tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!("Interrupted, flushing output");
                flush_sink(out)?;
                summary.interrupted = true;
                summary.blocks_emitted = processor.blocks_emitted();
                return Ok(summary);
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = next else {
            break;
        };

        summary.lines_read += 1;
        processor.process_line(&line, out)?;
    }

    debug!("End of input after {} line(s)", summary.lines_read);

    processor.finish(out)?;
    flush_sink(out)?;

    summary.blocks_emitted = processor.blocks_emitted();
    Ok(summary)
}
