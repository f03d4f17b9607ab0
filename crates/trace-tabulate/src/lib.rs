//! Trace Tabulate
//!
//! Streaming reshapers for line-oriented tracer output:
//!
//! - **aggregate**: histogram blocks (`^label` lines followed by
//!   `bucket |@@@ count` rows) become one CSV table per block, with a
//!   timestamp column, a bucket column and one column per label.
//! - **transpose**: `key:value` dumps become a keys row and a values row
//!   per block, with zero-valued pairs dropped.
//!
//! Both read blank-line delimited blocks and flush the sink after every
//! block so a live downstream consumer sees each block as it completes.
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install tabulate
//! sudo dtrace -s quantize.d | tabulate aggregate
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod stream;
pub mod utils;
