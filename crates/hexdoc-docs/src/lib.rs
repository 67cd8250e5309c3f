#![deny(clippy::all)]

//! Documentation service for hexdoc.
//!
//! This crate provides:
//! - A lightweight documentation model for exported symbols.
//! - A JSDoc extractor that reads a package's entry module with OXC.
//! - A Markdown generator for a selection of documented symbols.
//!
//! The import scanner in the `hexdoc` crate only depends on the symbol `name`
//! for lookups; everything else in [`ExportedSymbol`] is rendering payload.

pub mod error;
pub mod extractor;
pub mod jsdoc;
pub mod model;

#[cfg(feature = "markdown")]
pub mod generators;

pub use error::{DocsError, Result};
pub use extractor::{DocsExtractor, ExtractOptions};
pub use model::{ExportedSymbol, JsDocTag, ModuleDoc, ParameterDoc, SourceLocation, SymbolKind};

#[cfg(feature = "markdown")]
pub use generators::markdown::render_markdown;
