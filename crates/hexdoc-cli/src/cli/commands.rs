use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available hexdoc subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one Markdown file per imported vendor package
    ///
    /// Scans the inputs, locates each referenced package in node_modules,
    /// extracts JSDoc from its entry module and writes `<package>.md` into the
    /// output directory, overwriting existing files.
    Generate(GenerateArgs),

    /// Print the vendor packages and members imported by the inputs
    ///
    /// Does not look at installed packages and writes nothing.
    Scan(ScanArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Files or directories to scan
    ///
    /// Directories contribute their immediate .js, .mjs and .cjs files.
    /// Falls back to `inputs` from the config file.
    ///
    /// Examples:
    ///   hexdoc generate src
    ///   hexdoc generate src/index.js src/cli.js
    #[arg(value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Output directory for the Markdown files
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Package-name prefix that selects vendor imports
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Entry module inside each package, relative to the package root
    #[arg(long, value_name = "PATH")]
    pub entry: Option<PathBuf>,

    /// Document symbols marked @internal or @private
    #[arg(long)]
    pub include_internal: bool,
}

/// Arguments for the scan command
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Files or directories to scan
    #[arg(value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Package-name prefix that selects vendor imports
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Print the usage map as JSON
    #[arg(long)]
    pub json: bool,
}
