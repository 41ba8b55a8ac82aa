//! Run configuration derived from command line arguments.
use std::path::PathBuf;

use crate::cli::Args;

/// Where and how the rendered groups are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full unit written to `<stem>_generated<ext>` next to the input
    #[default]
    Standalone,
    /// Group functions only, appended to the input file itself
    Append,
}

/// Configuration for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Go source file to regroup.
    pub input: PathBuf,
    pub mode: OutputMode,
    /// Optional tera template replacing the built-in one for `mode`.
    pub template: Option<PathBuf>,
    /// Print rendered output instead of touching the file system.
    pub to_stdout: bool,
}

impl From<&Args> for GenerateConfig {
    fn from(args: &Args) -> Self {
        let mode = if args.append {
            OutputMode::Append
        } else {
            OutputMode::Standalone
        };

        Self {
            input: args.path.clone(),
            mode,
            template: args.template.clone(),
            to_stdout: args.stdout,
        }
    }
}
