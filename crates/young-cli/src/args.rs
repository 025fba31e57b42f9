//! Command-line argument definitions for the Young CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the partition, what to show about it,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use young::Marks;

/// Command-line arguments for the Young diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Partition as row lengths, e.g. `5,5,2,1` or `[5, 5, 2, 1]`
    #[arg(help = "Partition as comma-separated row lengths")]
    pub partition: String,

    /// Cells to mark in the rendered diagram (none, addable, removable)
    #[arg(short, long, default_value = "none")]
    pub marks: Marks,

    /// Work with the transposed (conjugate) diagram
    #[arg(short, long)]
    pub transpose: bool,

    /// Print hook lengths instead of cell glyphs
    #[arg(long)]
    pub hooks: bool,

    /// List the diagrams reachable by adding or removing one cell
    #[arg(long)]
    pub covers: bool,

    /// Path to the output file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
