//! Markdown output.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::task::JoinSet;
use tracing::debug;

use crate::batch::join_batch;
use crate::error::{Error, Result};
use crate::resolver::PackageDocBundle;

/// Writes one rendered Markdown file per bundle into an output directory.
///
/// Existing files are overwritten. Nothing is rolled back when a batch fails.
#[derive(Debug, Clone)]
pub struct DocsWriter {
    out_dir: PathBuf,
}

impl DocsWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Where `bundle` is written.
    pub fn target(&self, bundle: &PackageDocBundle) -> PathBuf {
        self.out_dir.join(bundle.file_name())
    }

    pub async fn write_bundle(&self, bundle: &PackageDocBundle) -> Result<PathBuf> {
        let target = self.target(bundle);
        write_file(target, bundle.render()).await
    }

    /// Writes all bundles concurrently and returns the paths in bundle order.
    pub async fn write_all(&self, bundles: &[PackageDocBundle]) -> Result<Vec<PathBuf>> {
        let mut join_set = JoinSet::new();
        for (index, bundle) in bundles.iter().enumerate() {
            let target = self.target(bundle);
            let contents = bundle.render();
            let package = bundle.package_name.clone();
            join_set.spawn(async move { (index, package, write_file(target, contents).await) });
        }

        join_batch(join_set, bundles.len()).await
    }
}

async fn write_file(target: PathBuf, contents: String) -> Result<PathBuf> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|error| Error::io(parent, error))?;
    }
    fs::write(&target, contents)
        .await
        .map_err(|error| Error::io(&target, error))?;
    debug!(path = %target.display(), "wrote documentation");
    Ok(target)
}
