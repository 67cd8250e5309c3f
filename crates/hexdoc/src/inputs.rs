//! Input expansion: turns the user's file and directory arguments into sources.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};

/// Extensions picked up when a directory is given as input.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// One input module: its path and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Reads a UTF-8 source file from disk.
    pub async fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = fs::read_to_string(&path)
            .await
            .map_err(|error| Error::io(&path, error))?;
        Ok(Self { path, contents })
    }
}

/// Returns `true` for files a directory expansion should include.
pub fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Expands input items into a flat list of source paths.
///
/// Every item is resolved against `base_dir` (absolute items are kept as is).
/// Directories contribute their immediate script files, non-recursively, sorted by
/// file name; any other item is taken verbatim. A missing item is an error.
pub async fn expand_inputs<I, P>(base_dir: &Path, items: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut files = Vec::new();
    for item in items {
        let full_path = base_dir.join(item.as_ref());
        let metadata = fs::metadata(&full_path)
            .await
            .map_err(|error| Error::io(&full_path, error))?;

        if metadata.is_dir() {
            let scripts = list_scripts(&full_path).await?;
            debug!(dir = %full_path.display(), count = scripts.len(), "expanded directory");
            files.extend(scripts);
        } else {
            files.push(full_path);
        }
    }
    Ok(files)
}

async fn list_scripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|error| Error::io(dir, error))?;

    let mut scripts = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|error| Error::io(dir, error))?
    {
        let path = entry.path();
        if !is_script(&path) {
            continue;
        }
        // Follows symlinks, unlike `DirEntry::file_type`.
        let metadata = fs::metadata(&path)
            .await
            .map_err(|error| Error::io(&path, error))?;
        if metadata.is_file() {
            scripts.push(path);
        }
    }
    scripts.sort();
    Ok(scripts)
}

/// Reads every path into a [`SourceFile`], failing on the first unreadable file.
pub async fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        sources.push(SourceFile::read(path.clone()).await?);
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    #[test]
    fn script_extensions() {
        assert!(is_script(Path::new("a/index.js")));
        assert!(is_script(Path::new("a/index.mjs")));
        assert!(is_script(Path::new("a/index.cjs")));
        assert!(!is_script(Path::new("a/index.ts")));
        assert!(!is_script(Path::new("a/README")));
    }

    #[tokio::test]
    async fn expands_directories_non_recursively() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("src");
        std_fs::create_dir_all(src.join("nested")).unwrap();
        std_fs::write(src.join("b.js"), "").unwrap();
        std_fs::write(src.join("a.js"), "").unwrap();
        std_fs::write(src.join("notes.md"), "").unwrap();
        std_fs::write(src.join("nested/deep.js"), "").unwrap();
        std_fs::write(temp.path().join("single.js"), "").unwrap();

        let files = expand_inputs(temp.path(), ["src", "single.js"]).await.unwrap();

        assert_eq!(
            files,
            vec![src.join("a.js"), src.join("b.js"), temp.path().join("single.js")]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn expands_symlinked_scripts() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("src");
        std_fs::create_dir_all(&src).unwrap();
        std_fs::write(temp.path().join("real.js"), "import { a } from 'hexlet-a';").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.js"), src.join("link.js")).unwrap();

        let files = expand_inputs(temp.path(), ["src"]).await.unwrap();
        assert_eq!(files, vec![src.join("link.js")]);

        let sources = read_sources(&files).await.unwrap();
        assert_eq!(sources[0].contents, "import { a } from 'hexlet-a';");
    }

    #[tokio::test]
    async fn explicit_files_keep_any_extension() {
        let temp = tempfile::tempdir().unwrap();
        std_fs::write(temp.path().join("app.ts"), "").unwrap();

        let files = expand_inputs(temp.path(), ["app.ts"]).await.unwrap();
        assert_eq!(files, vec![temp.path().join("app.ts")]);
    }

    #[tokio::test]
    async fn missing_input_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = expand_inputs(temp.path(), ["missing.js"]).await.unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("missing.js")));
    }

    #[tokio::test]
    async fn reads_sources() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("index.js");
        std_fs::write(&path, "import x from 'hexlet-x';").unwrap();

        let sources = read_sources(&[path.clone()]).await.unwrap();
        assert_eq!(sources, vec![SourceFile::new(path, "import x from 'hexlet-x';")]);
    }
}
