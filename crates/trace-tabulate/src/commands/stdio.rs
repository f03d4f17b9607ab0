//! Aggregate and transpose commands.
//!
//! Both commands:
//! 1. Start a single-threaded runtime
//! 2. Read stdin line by line
//! 3. Write blocks to buffered stdout, flushing after each block
//! 4. Stop at end of input or on Ctrl+C

use crate::stream::{run_stream, HistogramTabulator, LineProcessor, StreamSummary, TransposeEmitter};
use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{self, BufWriter};
use tokio::io::BufReader;
use tokio::runtime::Builder;

/// Execute the aggregate command (histogram blocks to CSV tables)
///
/// **Public** - main entry point called from main.rs
pub fn execute_aggregate() -> Result<StreamSummary> {
    info!("Tabulating histogram blocks from stdin");
    run_stdio(HistogramTabulator::new())
}

/// Execute the transpose command (`key:value` blocks to CSV rows)
///
/// **Public** - main entry point called from main.rs
pub fn execute_transpose() -> Result<StreamSummary> {
    info!("Transposing key/value blocks from stdin");
    run_stdio(TransposeEmitter::new())
}

/// Drive `processor` from stdin to stdout until end of input or Ctrl+C
///
/// **Private** - shared by both commands
fn run_stdio<P: LineProcessor>(mut processor: P) -> Result<StreamSummary> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let result = runtime.block_on(async {
        let reader = BufReader::new(tokio::io::stdin());
        let mut out = BufWriter::new(io::stdout().lock());

        run_stream(reader, &mut out, &mut processor, wait_for_interrupt()).await
    });

    // A stdin read may still be parked on a blocking thread after Ctrl+C
    runtime.shutdown_background();

    let summary = result.context("Failed to process input stream")?;
    info!("Done: {}", summary.summary());

    Ok(summary)
}

/// Resolve on Ctrl+C; never resolve if the handler cannot be installed
///
/// **Private** - shutdown future for run_stream
async fn wait_for_interrupt() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C"),
        Err(e) => {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
