//! Matching imported names against package documentation.

use std::sync::Arc;

use hexdoc_docs::{render_markdown, ExportedSymbol, ModuleDoc};
use indexmap::IndexSet;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::batch::join_batch;
use crate::collector::PackageUsageMap;
use crate::docs::{DocSource, EntryDocSource};
use crate::error::Result;
use crate::locator::{global_npm_root, node_path_dirs, NodeModulesLocator, PackageLocator};

/// Documentation selected for one package, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDocBundle {
    pub package_name: String,
    /// Entries for the requested names that were documented, in request order.
    pub entries: Vec<ExportedSymbol>,
    /// Requested names with no documentation entry.
    pub missing: Vec<String>,
}

impl PackageDocBundle {
    /// Looks up every requested name in `doc`.
    ///
    /// A name without an entry is dropped from `entries`, recorded in `missing`
    /// and reported with one warning.
    pub fn from_docs<'n, I>(package: &str, names: I, doc: &ModuleDoc) -> Self
    where
        I: IntoIterator<Item = &'n String>,
    {
        let mut entries = Vec::new();
        let mut missing = Vec::new();

        for name in names {
            match doc.find(name) {
                Some(symbol) => entries.push(symbol.clone()),
                None => {
                    warn!(%package, "Documentation for function \"{name}\" not found!");
                    missing.push(name.clone());
                }
            }
        }

        Self {
            package_name: package.to_string(),
            entries,
            missing,
        }
    }

    /// Output file name, `<package>.md`.
    ///
    /// Scoped packages (`@scope/name`) keep their slash and land in a subdirectory.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.package_name)
    }

    pub fn render(&self) -> String {
        render_markdown(&self.entries)
    }
}

/// Resolves each package of a usage map to a [`PackageDocBundle`].
#[derive(Clone)]
pub struct DocResolver {
    locator: Arc<dyn PackageLocator>,
    docs: Arc<dyn DocSource>,
}

impl std::fmt::Debug for DocResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocResolver").finish_non_exhaustive()
    }
}

impl DocResolver {
    pub fn new(locator: Arc<dyn PackageLocator>, docs: Arc<dyn DocSource>) -> Self {
        Self { locator, docs }
    }

    /// `node_modules` lookup from `base_dir` (then `NODE_PATH` and the global npm
    /// root) and the default entry module.
    pub fn node_modules(base_dir: impl Into<std::path::PathBuf>) -> Self {
        let locator = NodeModulesLocator::new(base_dir)
            .with_global_dirs(node_path_dirs())
            .with_global_dirs(global_npm_root());
        Self::new(
            Arc::new(locator),
            Arc::new(EntryDocSource::default()),
        )
    }

    /// Locates, documents and filters a single package. The steps run in order.
    pub async fn resolve_package(
        &self,
        package: &str,
        names: &IndexSet<String>,
    ) -> Result<PackageDocBundle> {
        resolve_one(
            Arc::clone(&self.locator),
            Arc::clone(&self.docs),
            package.to_string(),
            names.clone(),
        )
        .await
    }

    /// Resolves every package concurrently.
    ///
    /// Bundles come back in map order. The first failing package fails the
    /// whole call; see [`Error::Batch`](crate::Error::Batch).
    pub async fn resolve(&self, map: &PackageUsageMap) -> Result<Vec<PackageDocBundle>> {
        let mut join_set = JoinSet::new();
        for (index, (package, names)) in map.iter().enumerate() {
            let locator = Arc::clone(&self.locator);
            let docs = Arc::clone(&self.docs);
            let package = package.to_string();
            let names = names.clone();

            join_set.spawn(async move {
                let result = resolve_one(locator, docs, package.clone(), names).await;
                (index, package, result)
            });
        }

        join_batch(join_set, map.len()).await
    }
}

async fn resolve_one(
    locator: Arc<dyn PackageLocator>,
    docs: Arc<dyn DocSource>,
    package: String,
    names: IndexSet<String>,
) -> Result<PackageDocBundle> {
    let package_dir = locator.locate(&package).await?;
    let doc = docs.build(&package, &package_dir).await?;
    let bundle = PackageDocBundle::from_docs(&package, &names, &doc);
    debug!(
        %package,
        entries = bundle.entries.len(),
        missing = bundle.missing.len(),
        "resolved package"
    );
    Ok(bundle)
}
