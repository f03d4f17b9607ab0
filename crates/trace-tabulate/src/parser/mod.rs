//! Line classification for both input grammars.
//!
//! This module handles:
//! - Tagging histogram lines as blank, label, sample or unrecognized
//! - Splitting `key:value` lines for the transpose emitter
//!
//! Classification is pure: nothing here touches aggregation state.

pub mod line;
pub mod pair;

// Re-export main types
pub use line::{classify_line, parse_sample, HistogramLine};
pub use pair::{classify_pair, PairLine};
