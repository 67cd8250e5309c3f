//! End-to-end generation: inputs, collection, resolution and writing.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::collector::{ImportCollector, PackageUsageMap};
use crate::error::Result;
use crate::inputs::{expand_inputs, read_sources};
use crate::resolver::{DocResolver, PackageDocBundle};
use crate::writer::DocsWriter;

/// Outcome of a [`Generator::run`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    /// Number of source files scanned.
    pub sources: usize,
    /// One summary per written file, in usage-map order.
    pub packages: Vec<PackageSummary>,
}

impl GenerateReport {
    pub fn missing_count(&self) -> usize {
        self.packages.iter().map(|p| p.missing.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub name: String,
    /// Documented names, in output order.
    pub entries: Vec<String>,
    /// Imported names that had no documentation.
    pub missing: Vec<String>,
    pub path: PathBuf,
}

/// Drives the whole pipeline for one project directory.
///
/// Relative inputs and output directories resolve against `base_dir`.
#[derive(Debug, Clone)]
pub struct Generator {
    base_dir: PathBuf,
    collector: ImportCollector,
    resolver: DocResolver,
}

impl Generator {
    pub fn new(
        base_dir: impl Into<PathBuf>,
        collector: ImportCollector,
        resolver: DocResolver,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            collector,
            resolver,
        }
    }

    /// `hexlet` prefix, `node_modules` lookup from `base_dir`, `src/index.js` entries.
    pub fn with_defaults(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let resolver = DocResolver::node_modules(base_dir.clone());
        Self::new(base_dir, ImportCollector::default(), resolver)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn collector(&self) -> &ImportCollector {
        &self.collector
    }

    /// Expands `items` and builds the usage map without touching any package.
    pub async fn scan<I, P>(&self, items: I) -> Result<PackageUsageMap>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths = expand_inputs(&self.base_dir, items).await?;
        self.collect(&paths).await
    }

    /// Collects imports from `paths` and resolves every referenced package.
    pub async fn generate(&self, paths: &[PathBuf]) -> Result<Vec<PackageDocBundle>> {
        let map = self.collect(paths).await?;
        self.resolver.resolve(&map).await
    }

    /// Runs the full pipeline and writes `<package>.md` files into `out_dir`.
    pub async fn run<I, P>(&self, out_dir: impl AsRef<Path>, items: I) -> Result<GenerateReport>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths = expand_inputs(&self.base_dir, items).await?;
        info!(sources = paths.len(), "scanning sources");

        let bundles = self.generate(&paths).await?;
        let writer = DocsWriter::new(self.base_dir.join(out_dir.as_ref()));
        let written = writer.write_all(&bundles).await?;

        let packages: Vec<PackageSummary> = bundles
            .into_iter()
            .zip(written)
            .map(|(bundle, path)| PackageSummary {
                name: bundle.package_name,
                entries: bundle.entries.into_iter().map(|entry| entry.name).collect(),
                missing: bundle.missing,
                path,
            })
            .collect();

        info!(
            packages = packages.len(),
            out_dir = %writer.out_dir().display(),
            "documentation written"
        );
        Ok(GenerateReport {
            sources: paths.len(),
            packages,
        })
    }

    async fn collect(&self, paths: &[PathBuf]) -> Result<PackageUsageMap> {
        let sources = read_sources(paths).await?;
        let map = self.collector.collect(&sources)?;
        debug!(
            prefix = self.collector.prefix(),
            packages = map.len(),
            "built usage map"
        );
        Ok(map)
    }
}
