//! Command-line interface module.
//!
//! This module handles CLI argument parsing and validation of the chart
//! directory for the ENC extractor.

use crate::config::{DEFAULT_LAYER, DEFAULT_OUTPUT};
use crate::ui::output::print_error;
use clap::Parser;
use std::{path::PathBuf, process};

/// CLI arguments for the ENC feature extractor
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = format!("Extract {} features from S57 ENC files", DEFAULT_LAYER.name),
    long_about = None
)]
pub struct Args {
    /// Parent directory to search for .000 files
    pub parent_dir: PathBuf,

    /// Output CSV file
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Include source filename in CSV output
    #[arg(long = "source")]
    pub source: bool,
}

/// Checks that the positional argument names a directory.
///
/// # Returns
/// `Err` with the message shown to the user when it doesn't.
pub fn validate_parent_dir(args: &Args) -> Result<(), String> {
    if args.parent_dir.is_dir() {
        Ok(())
    } else {
        Err(format!(
            "'{}' is not a valid directory",
            args.parent_dir.display()
        ))
    }
}

/// Resolves the directory to scan.
///
/// # Exits
/// This function will exit the process with status code 1 if the path is
/// missing or is not a directory.
pub fn resolve_parent_dir(args: &Args) -> PathBuf {
    if let Err(message) = validate_parent_dir(args) {
        print_error(&message);
        process::exit(1);
    }
    args.parent_dir.clone()
}
