//! Streaming drivers for the two utilities.
//!
//! A [`LineProcessor`] turns lines into output blocks; [`run_stream`]
//! feeds it from an async line source until end-of-stream or shutdown.

pub mod clock;
pub mod histogram;
pub mod processor;
pub mod runner;
pub mod transpose;

// Re-export main types and functions
pub use clock::{Clock, LocalClock};
pub use histogram::HistogramTabulator;
pub use processor::LineProcessor;
pub use runner::{run_stream, StreamSummary};
pub use transpose::TransposeEmitter;
