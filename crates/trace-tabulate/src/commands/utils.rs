use crate::utils::config::{LABEL_MARKER, PAIR_SEPARATOR, SAMPLE_PATTERN, TIMESTAMP_FORMAT};

/// Display version and input grammar information
///
/// **Public** - called from main.rs
pub fn display_version() {
    println!("Trace Tabulate v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("aggregate  - histogram blocks to CSV tables");
    println!("  label line:  {}<label>", LABEL_MARKER);
    println!("  sample line: {}", SAMPLE_PATTERN);
    println!("  timestamp:   {}", TIMESTAMP_FORMAT);
    println!("transpose  - key{}value blocks to CSV rows", PAIR_SEPARATOR);
    println!();
    println!("Blocks end at a blank line. Input is read from stdin, output written to stdout.");
}
