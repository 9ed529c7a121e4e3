//! CLI argument definitions using clap.
//!
//! The tool has a single mode: scan a directory tree for `.strings`
//! files and report missing keys. `-v` is the version flag (not clap's
//! default `-V`), matching long-standing behavior of the tool.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::report::ReportFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Arguments {
    /// Root directory to scan recursively (defaults to the current directory)
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Append missing entries to target files, using the reference value
    /// as a placeholder
    #[arg(short = 'a', long = "append")]
    pub append: bool,

    /// Format of the report artifact written to the working directory
    #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
    pub format: ReportFormat,

    /// Enable verbose output (per-line parse diagnostics)
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}
