//! Focused API references for vendor packages.
//!
//! `hexdoc` reads a set of JavaScript modules, finds every top-level `import` of a
//! package whose name starts with the vendor prefix (`hexlet` by default), and
//! writes one Markdown file per package documenting only the members that were
//! actually imported.
//!
//! # Architecture
//!
//! - [`inputs`] - expands files and directories into source files
//! - [`collector`] - builds the [`PackageUsageMap`] from import declarations
//! - [`locator`] - finds a package's installation directory
//! - [`docs`] - builds documentation for a package's entry module
//! - [`resolver`] - matches imported names with documentation entries
//! - [`writer`] - renders and writes one Markdown file per package
//! - [`pipeline`] - wires the stages together
//!
//! # Example
//!
//! ```rust,no_run
//! use hexdoc::Generator;
//!
//! # async fn run() -> hexdoc::Result<()> {
//! let generator = Generator::with_defaults("/path/to/project");
//! let report = generator.run("docs", ["src"]).await?;
//! println!("wrote {} file(s)", report.packages.len());
//! # Ok(())
//! # }
//! ```

mod batch;
pub mod collector;
pub mod docs;
pub mod error;
pub mod inputs;
pub mod locator;
pub mod pipeline;
pub mod resolver;
pub mod writer;

pub use collector::{
    ImportBinding, ImportCollector, ImportReference, PackageUsageMap, DEFAULT_VENDOR_PREFIX,
};
pub use docs::{DocSource, EntryDocSource, DEFAULT_ENTRY};
pub use error::{Error, Result};
pub use inputs::{expand_inputs, read_sources, SourceFile};
pub use locator::{global_npm_root, node_path_dirs, NodeModulesLocator, PackageLocator};
pub use pipeline::{GenerateReport, Generator, PackageSummary};
pub use resolver::{DocResolver, PackageDocBundle};
pub use writer::DocsWriter;
