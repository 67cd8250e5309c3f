//! Command implementations for the hexdoc CLI.
//!
//! - [`generate`] - full pipeline, writes `<package>.md` files
//! - [`scan`] - prints the import usage map
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments plus the global options and returns a Result.

pub mod generate;
pub mod scan;
pub(crate) mod utils;

pub use generate::execute as generate_execute;
pub use scan::execute as scan_execute;
