//! Documentation building for installed packages.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hexdoc_docs::{DocsExtractor, ExtractOptions, ModuleDoc};
use tracing::debug;

use crate::error::{Error, Result};

/// Entry module read from a package root when none is configured.
pub const DEFAULT_ENTRY: &str = "src/index.js";

/// Produces the full documentation of a package.
#[async_trait]
pub trait DocSource: Send + Sync {
    async fn build(&self, package: &str, package_dir: &Path) -> Result<ModuleDoc>;
}

/// Extracts JSDoc from a fixed entry module inside the package root.
#[derive(Debug, Clone)]
pub struct EntryDocSource {
    entry: PathBuf,
    extractor: DocsExtractor,
}

impl Default for EntryDocSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY, ExtractOptions::default())
    }
}

impl EntryDocSource {
    pub fn new(entry: impl Into<PathBuf>, options: ExtractOptions) -> Self {
        Self {
            entry: entry.into(),
            extractor: DocsExtractor::new(options),
        }
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }
}

#[async_trait]
impl DocSource for EntryDocSource {
    async fn build(&self, package: &str, package_dir: &Path) -> Result<ModuleDoc> {
        let entry_path = package_dir.join(&self.entry);
        let extractor = self.extractor.clone();
        debug!(%package, entry = %entry_path.display(), "building documentation");

        // Parsing is CPU-bound; keep it off the async workers.
        let built = tokio::task::spawn_blocking(move || extractor.extract_from_path(entry_path))
            .await
            .map_err(|join_err| Error::TaskFailed(join_err.to_string()))?;

        built.map_err(|source| Error::DocBuild {
            package: package.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexdoc_docs::DocsError;
    use std::fs;

    #[tokio::test]
    async fn builds_entry_module() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(
            temp.path().join("src/index.js"),
            "/** Build a pair. */\nexport const cons = (a, b) => [a, b];\n",
        )
        .unwrap();

        let doc = EntryDocSource::default()
            .build("hexlet-pairs", temp.path())
            .await
            .unwrap();
        assert_eq!(
            doc.find("cons").and_then(|s| s.summary.as_deref()),
            Some("Build a pair.")
        );
    }

    #[tokio::test]
    async fn entry_with_only_reexports() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(
            temp.path().join("src/pairs.js"),
            "/** Build a pair. */\nexport const cons = (a, b) => [a, b];\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("src/lists.js"),
            "/** Build a list. */\nexport function l(...items) { return items; }\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("src/index.js"),
            "export { cons } from './pairs';\nexport * from './lists.js';\n",
        )
        .unwrap();

        let doc = EntryDocSource::default()
            .build("hexlet-pairs-data", temp.path())
            .await
            .unwrap();
        assert_eq!(
            doc.find("cons").and_then(|s| s.summary.as_deref()),
            Some("Build a pair.")
        );
        assert_eq!(
            doc.find("l").and_then(|s| s.summary.as_deref()),
            Some("Build a list.")
        );
    }

    #[tokio::test]
    async fn custom_entry() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("main.mjs"), "export function run() {}").unwrap();

        let source = EntryDocSource::new("main.mjs", ExtractOptions::default());
        let doc = source.build("hexlet-run", temp.path()).await.unwrap();
        assert!(doc.find("run").is_some());
    }

    #[tokio::test]
    async fn missing_entry_is_doc_build_error() {
        let temp = tempfile::tempdir().unwrap();

        let err = EntryDocSource::default()
            .build("hexlet-empty", temp.path())
            .await
            .unwrap_err();
        match err {
            Error::DocBuild { package, source } => {
                assert_eq!(package, "hexlet-empty");
                assert!(matches!(source, DocsError::Io { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn broken_entry_is_doc_build_error() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/index.js"), "export function (").unwrap();

        let err = EntryDocSource::default()
            .build("hexlet-broken", temp.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DocBuild {
                source: DocsError::Parse { .. },
                ..
            }
        ));
    }
}
