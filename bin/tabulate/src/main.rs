//! Trace Tabulate CLI
//!
//! Reshapes blank-line delimited tracer output on stdin into CSV on stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;

use trace_tabulate::commands::{display_version, execute_aggregate, execute_transpose};

/// Trace Tabulate - tracer output to CSV, one block at a time
#[derive(Parser, Debug)]
#[command(name = "tabulate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn `^label` / `bucket |@@ count` histogram blocks into CSV tables
    Aggregate,

    /// Turn `key:value` blocks into a keys row and a values row
    Transpose,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Aggregate => {
            let summary = execute_aggregate()?;
            debug!("aggregate finished: {:?}", summary);
        }

        Commands::Transpose => {
            let summary = execute_transpose()?;
            debug!("transpose finished: {:?}", summary);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
