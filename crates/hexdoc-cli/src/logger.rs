//! Logging setup for the hexdoc CLI.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that prints them. Lookup misses are `WARN` events, so they show
//! up at the default level and disappear with `--quiet`.
//!
//! # Example
//!
//! ```rust,no_run
//! use hexdoc_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Scanning sources");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "hexdoc=debug,hexdoc_docs=debug,hexdoc_cli=debug";
const QUIET_FILTER: &str = "hexdoc=error,hexdoc_docs=error,hexdoc_cli=error";
const DEFAULT_FILTER: &str = "hexdoc=info,hexdoc_docs=info,hexdoc_cli=info";

/// Pick the event filter for the given flags.
///
/// Priority: `--verbose`, then `--quiet`, then `RUST_LOG`, then info for the
/// hexdoc crates.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize the subscriber with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
