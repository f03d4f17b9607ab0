//! Per-block aggregation state.
//!
//! This module owns what accumulates between two blank lines:
//! - Histogram series keyed by label and bucket
//! - Key/value pairs for transposition
//!
//! Each state is replaced by value when its block is flushed, so nothing
//! carries over between blocks.

pub mod block;
pub mod transpose;

// Re-export main types
pub use block::{BlockState, BlockTable, BucketRow};
pub use transpose::PairBlock;
