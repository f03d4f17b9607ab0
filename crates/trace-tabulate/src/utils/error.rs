//! Error types for the library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands.
//!
//! Malformed input lines are never errors; they are dropped during
//! classification.

use thiserror::Error;

/// Errors that can occur while writing to the output sink
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write to output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to flush output: {0}")]
    FlushFailed(#[source] std::io::Error),
}

/// Errors that can occur while driving a line stream
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Failed to read input line: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error(transparent)]
    Output(#[from] OutputError),
}
