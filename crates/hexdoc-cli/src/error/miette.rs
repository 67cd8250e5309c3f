//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Hexdoc(e) => hexdoc_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a hexdoc library error to a miette Report with a hint.
pub fn hexdoc_error_to_miette(err: hexdoc::Error) -> Report {
    match err {
        hexdoc::Error::Batch {
            package,
            completed,
            source,
        } => {
            let done = if completed.is_empty() {
                "none".to_string()
            } else {
                completed.join(", ")
            };
            hexdoc_error_to_miette(*source).wrap_err(format!(
                "Generation stopped at '{package}' (completed: {done}); files already written were kept"
            ))
        }
        hexdoc::Error::PackageNotFound { package, searched } => {
            let locations: Vec<String> = searched
                .iter()
                .map(|path| format!("  {}", path.display()))
                .collect();
            miette::miette!(
                help = format!("Install it with `npm install {package}` or add its location to NODE_PATH"),
                "Package '{}' is not installed. Searched:\n{}",
                package,
                locations.join("\n")
            )
        }
        hexdoc::Error::Parse { path, message } => miette::miette!(
            help = "Only valid ES modules can be scanned",
            "Failed to parse {}: {}",
            path.display(),
            message
        ),
        hexdoc::Error::DocBuild { package, source } => miette::miette!(
            help = "Check the package entry module or set `entry` in hexdoc.config.json",
            "Failed to build documentation for '{}': {}",
            package,
            source
        ),
        other => miette::miette!("{}", other),
    }
}
