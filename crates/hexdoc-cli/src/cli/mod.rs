//! Command-line interface definition for hexdoc.
//!
//! # Command Structure
//!
//! - `hexdoc generate` - write one Markdown reference per imported vendor package
//! - `hexdoc scan` - print which vendor packages and members are imported

mod commands;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{Command, GenerateArgs, ScanArgs};

/// hexdoc - focused API references for the vendor packages a project imports
#[derive(Parser, Debug)]
#[command(
    name = "hexdoc",
    version,
    about = "Generate Markdown references for the vendor functions a project imports",
    long_about = "hexdoc scans JavaScript modules for top-level imports from packages whose\n\
                  name starts with the vendor prefix (\"hexlet\" by default) and writes one\n\
                  Markdown file per package, documenting only the members actually imported."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Also hides the warnings for imported functions without documentation.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory; inputs, outDir and node_modules lookups are relative to it
    ///
    /// Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Path to a config file (defaults to <cwd>/hexdoc.config.json when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub cwd: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            cwd: self.cwd.clone(),
            config: self.config.clone(),
        }
    }
}
