//! hexdoc CLI - focused Markdown references for imported vendor packages.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions (`generate`, `scan`, global flags)
//! - [`config`] - layered configuration (defaults, file, environment, CLI)
//! - [`commands`] - command implementations on top of the `hexdoc` crate
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines for the terminal

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
