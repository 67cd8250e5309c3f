//! hexdoc CLI entry point: argument parsing, logging setup and command dispatch.

use clap::Parser;
use hexdoc_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let global = args.global_options();
    let result = match args.command {
        cli::Command::Generate(generate_args) => {
            commands::generate_execute(generate_args, &global).await
        }
        cli::Command::Scan(scan_args) => commands::scan_execute(scan_args, &global).await,
    };

    result.map_err(error::cli_error_to_miette)
}
