//! CLI argument structures

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Evaluate the built-in configuration into its derived output record
#[derive(Parser)]
#[command(name = "config-composer")]
#[command(about = "config-composer - Evaluate a static configuration into a derived record", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the configuration and print the output record (default)
    Eval {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,

        /// Write the record to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the input configuration record
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Evaluate twice and check the result is reproducible and correctly derived
    Verify,
}
