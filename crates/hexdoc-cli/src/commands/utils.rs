//! Shared utilities for command implementations.

use crate::cli::GlobalOptions;
use crate::config::{ConfigOverrides, HexdocConfig};
use crate::error::{CliError, Result};
use hexdoc::{DocResolver, EntryDocSource, Generator, ImportCollector, NodeModulesLocator};
use hexdoc_docs::ExtractOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// The project directory: `--cwd` (relative to the process cwd) or the process cwd.
pub fn resolve_base_dir(cwd: Option<&Path>) -> Result<PathBuf> {
    let process_cwd = get_cwd()?;
    let base_dir = match cwd {
        Some(dir) => resolve_path(dir, &process_cwd),
        None => process_cwd,
    };

    if !base_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "--cwd is not a directory: {}",
            base_dir.display()
        )));
    }
    Ok(base_dir)
}

/// Resolve the project directory and load the validated configuration.
pub fn load_config(
    global: &GlobalOptions,
    overrides: &ConfigOverrides,
) -> Result<(PathBuf, HexdocConfig)> {
    let base_dir = resolve_base_dir(global.cwd.as_deref())?;
    let config = HexdocConfig::load(&base_dir, global.config.as_deref(), overrides)?;
    config.validate()?;
    Ok((base_dir, config))
}

/// Wire a [`Generator`] from the configuration.
pub fn build_generator(base_dir: &Path, config: &HexdocConfig) -> Generator {
    let global_dirs = config
        .node_paths
        .iter()
        .map(|dir| resolve_path(dir, base_dir));
    let locator = NodeModulesLocator::new(base_dir)
        .with_global_dirs(global_dirs)
        .with_global_dirs(hexdoc::global_npm_root());

    let docs = EntryDocSource::new(
        &config.entry,
        ExtractOptions {
            include_internal: config.include_internal,
        },
    );

    Generator::new(
        base_dir,
        ImportCollector::new(&config.vendor_prefix),
        DocResolver::new(Arc::new(locator), Arc::new(docs)),
    )
}
