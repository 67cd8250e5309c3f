use std::path::PathBuf;

pub fn default_vendor_prefix() -> String {
    hexdoc::DEFAULT_VENDOR_PREFIX.to_string()
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("docs")
}

pub fn default_entry() -> PathBuf {
    PathBuf::from(hexdoc::DEFAULT_ENTRY)
}

/// Entries of `NODE_PATH`, if set.
pub fn default_node_paths() -> Vec<PathBuf> {
    hexdoc::node_path_dirs()
}
