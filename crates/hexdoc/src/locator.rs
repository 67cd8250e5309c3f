//! Package installation lookup.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};

/// Resolves a package name to the directory it is installed in.
#[async_trait]
pub trait PackageLocator: Send + Sync {
    /// Returns the package root (the directory holding its `package.json`).
    async fn locate(&self, package: &str) -> Result<PathBuf>;
}

/// Node-style lookup: `node_modules/<package>` in the base directory and each of
/// its ancestors, then in the configured global directories.
#[derive(Debug, Clone)]
pub struct NodeModulesLocator {
    base_dir: PathBuf,
    global_dirs: Vec<PathBuf>,
}

impl NodeModulesLocator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            global_dirs: Vec::new(),
        }
    }

    /// Adds directories searched after the ancestor chain, such as `NODE_PATH` entries.
    pub fn with_global_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.global_dirs.extend(dirs);
        self
    }

    /// Every directory a package is looked up in, in search order.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        self.base_dir
            .ancestors()
            .map(|dir| dir.join("node_modules"))
            .chain(self.global_dirs.iter().cloned())
            .collect()
    }
}

#[async_trait]
impl PackageLocator for NodeModulesLocator {
    async fn locate(&self, package: &str) -> Result<PathBuf> {
        let searched = self.search_roots();
        for root in &searched {
            let candidate = root.join(package);
            if is_package_root(&candidate).await {
                debug!(%package, path = %candidate.display(), "located package");
                return Ok(candidate);
            }
        }

        Err(Error::PackageNotFound {
            package: package.to_string(),
            searched,
        })
    }
}

async fn is_package_root(dir: &Path) -> bool {
    fs::try_exists(dir.join("package.json"))
        .await
        .unwrap_or(false)
}

/// The global npm `node_modules` directory, derived from `npm_config_prefix`
/// (or `PREFIX`). `None` when neither is set.
pub fn global_npm_root() -> Option<PathBuf> {
    let prefix = std::env::var_os("npm_config_prefix")
        .or_else(|| std::env::var_os("PREFIX"))
        .filter(|prefix| !prefix.is_empty())?;
    Some(global_root_from_prefix(Path::new(&prefix)))
}

/// npm installs global packages in `<prefix>/lib/node_modules`, or
/// `<prefix>/node_modules` on Windows.
fn global_root_from_prefix(prefix: &Path) -> PathBuf {
    if cfg!(windows) {
        prefix.join("node_modules")
    } else {
        prefix.join("lib").join("node_modules")
    }
}

/// Splits `NODE_PATH` into directories, skipping empty entries.
pub fn node_path_dirs() -> Vec<PathBuf> {
    std::env::var_os("NODE_PATH")
        .map(|value| {
            std::env::split_paths(&value)
                .filter(|path| !path.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn install(root: &Path, package: &str) -> PathBuf {
        let dir = root.join("node_modules").join(package);
        std_fs::create_dir_all(&dir).unwrap();
        std_fs::write(dir.join("package.json"), "{}").unwrap();
        dir
    }

    #[tokio::test]
    async fn finds_package_in_base_dir() {
        let temp = tempfile::tempdir().unwrap();
        let expected = install(temp.path(), "hexlet-pairs");

        let located = NodeModulesLocator::new(temp.path())
            .locate("hexlet-pairs")
            .await
            .unwrap();
        assert_eq!(located, expected);
    }

    #[tokio::test]
    async fn walks_up_to_ancestors() {
        let temp = tempfile::tempdir().unwrap();
        let expected = install(temp.path(), "@hexlet/code");
        let nested = temp.path().join("packages/app");
        std_fs::create_dir_all(&nested).unwrap();

        let located = NodeModulesLocator::new(&nested)
            .locate("@hexlet/code")
            .await
            .unwrap();
        assert_eq!(located, expected);
    }

    #[tokio::test]
    async fn falls_back_to_global_dirs() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        let expected = install(global.path(), "hexlet-points");

        let located = NodeModulesLocator::new(project.path())
            .with_global_dirs([global.path().join("node_modules")])
            .locate("hexlet-points")
            .await
            .unwrap();
        assert_eq!(located, expected);
    }

    #[tokio::test]
    async fn directory_without_manifest_is_not_a_package() {
        let temp = tempfile::tempdir().unwrap();
        std_fs::create_dir_all(temp.path().join("node_modules/hexlet-pairs")).unwrap();

        let err = NodeModulesLocator::new(temp.path())
            .locate("hexlet-pairs")
            .await
            .unwrap_err();
        match err {
            Error::PackageNotFound { package, searched } => {
                assert_eq!(package, "hexlet-pairs");
                assert_eq!(searched[0], temp.path().join("node_modules"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn finds_globally_installed_package() {
        let project = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();
        let global_root = global_root_from_prefix(prefix.path());
        assert_eq!(global_root, prefix.path().join("lib/node_modules"));

        let dir = global_root.join("hexlet-code");
        std_fs::create_dir_all(&dir).unwrap();
        std_fs::write(dir.join("package.json"), "{}").unwrap();

        let located = NodeModulesLocator::new(project.path())
            .with_global_dirs(Some(global_root))
            .locate("hexlet-code")
            .await
            .unwrap();
        assert_eq!(located, dir);
    }

    #[test]
    fn search_roots_end_with_global_dirs() {
        let locator = NodeModulesLocator::new("/work/app")
            .with_global_dirs([PathBuf::from("/usr/lib/node_modules")]);
        let roots = locator.search_roots();
        assert_eq!(roots.first(), Some(&PathBuf::from("/work/app/node_modules")));
        assert_eq!(roots.last(), Some(&PathBuf::from("/usr/lib/node_modules")));
    }
}
