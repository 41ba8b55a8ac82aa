//! CLI argument parsing.
use std::path::PathBuf;

use clap::Parser;

/// Regroup flat `TestGroup_Case` functions into parallel table-style tests.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Go test file to regroup.
    pub path: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Append the generated group functions to PATH instead of writing a
    /// standalone `<stem>_generated<ext>` file.
    pub append: bool,

    #[arg(long, value_name = "FILE")]
    /// Tera template replacing the built-in template of the selected mode.
    pub template: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Print the generated source to stdout instead of writing files.
    pub stdout: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
