//! Command-line argument definitions for the Stencil CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select a single input or a batch folder, the
//! output directory, the configuration file and the logging verbosity.

use clap::Parser;

/// Command-line arguments for the Stencil converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input BPMN file
    #[arg(
        help = "Path to the input .bpmn file",
        required_unless_present = "batch",
        conflicts_with = "batch"
    )]
    pub input: Option<String>,

    /// Convert every .bpmn file under this folder
    #[arg(long, value_name = "FOLDER")]
    pub batch: Option<String>,

    /// Output directory; defaults to the directory of each input
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
