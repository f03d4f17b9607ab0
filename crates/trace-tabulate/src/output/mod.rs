//! Output writers for flushed blocks.
//!
//! This module renders completed blocks as comma-separated rows onto any
//! `std::io::Write` sink and forces delivery after each block, so a
//! downstream process reading the pipe sees blocks as they complete.

pub mod csv;

// Re-export main functions
pub use csv::{flush_sink, header_line, row_line, write_block_table, write_pair_rows};
