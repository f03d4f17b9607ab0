//! CLI command implementations.
//!
//! Commands wire stdin, stdout and Ctrl+C to the stream drivers.

pub mod stdio;
pub mod utils;

// Re-export main command functions
pub use stdio::{execute_aggregate, execute_transpose};
pub use utils::display_version;
