use std::path::{Path, PathBuf};

use hexdoc_docs::DocsError;
use thiserror::Error;

/// Result type alias for hexdoc operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while scanning sources and producing documentation.
///
/// A documentation entry that cannot be found for an imported name is not an
/// error: it is logged and reported in [`PackageDocBundle::missing`].
///
/// [`PackageDocBundle::missing`]: crate::resolver::PackageDocBundle::missing
#[derive(Debug, Error)]
pub enum Error {
    /// A source file is not a valid ES module.
    #[error("failed to parse '{}': {message}", .path.display())]
    Parse {
        path: PathBuf,
        /// Parser diagnostics joined with `; `.
        message: String,
    },

    /// A referenced vendor package is not installed in any searched location.
    #[error("package '{package}' is not installed (searched {} location(s))", .searched.len())]
    PackageNotFound {
        package: String,
        /// `node_modules` directories that were searched, in order.
        searched: Vec<PathBuf>,
    },

    /// The documentation service failed on a package's entry module.
    #[error("failed to build documentation for '{package}': {source}")]
    DocBuild {
        package: String,
        #[source]
        source: DocsError,
    },

    /// File system access failed.
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One package of a concurrent batch failed, failing the whole batch.
    #[error("'{package}' failed after {} package(s) completed: {source}", .completed.len())]
    Batch {
        /// Package whose failure ended the batch.
        package: String,
        /// Packages that finished successfully before the failure was observed.
        completed: Vec<String>,
        #[source]
        source: Box<Error>,
    },

    /// A background task panicked or was cancelled.
    #[error("background task failed: {0}")]
    TaskFailed(String),
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The underlying error, looking through [`Error::Batch`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Self::Batch { source, .. } => source.root(),
            other => other,
        }
    }
}
