//! Command-line argument parsing and handling.

use std::path::PathBuf;

use clap::Parser;

/// Generate Ayu color themes for Xcode.
#[derive(Parser, Debug)]
#[command(name = "ayu-xcode")]
#[command(version)]
#[command(about = "Generates Ayu .xccolortheme files (light, dark, mirage)", long_about = None)]
pub struct Args {
    /// Directory to write the generated .xccolortheme files into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Generate only the listed variants (light, dark, mirage); default is all
    #[arg(long, num_args = 1..)]
    pub variant: Vec<String>,

    /// Render themes without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the color-conversion script (default: scripts/convert-color.swift)
    #[arg(long)]
    pub converter: Option<PathBuf>,
}

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the log_level argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
