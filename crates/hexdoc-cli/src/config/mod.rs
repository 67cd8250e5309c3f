//! Configuration for hexdoc with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment (`HEXDOC_*`) > File (`hexdoc.config.json`) > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{CONFIG_FILE_NAME, ConfigOverrides, ENV_PREFIX};

/// hexdoc configuration, loaded from hexdoc.config.json, the environment and CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HexdocConfig {
    /// Files or directories scanned when none are given on the command line
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<PathBuf>,

    /// Package-name prefix that selects vendor imports
    #[serde(default = "default_vendor_prefix", alias = "vendor_prefix")]
    pub vendor_prefix: String,

    /// Output directory for generated Markdown
    #[serde(default = "default_out_dir", alias = "out_dir")]
    pub out_dir: PathBuf,

    /// Entry module inside each package, relative to the package root
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Document symbols marked @internal or @private
    #[serde(default, alias = "include_internal")]
    pub include_internal: bool,

    /// Extra node_modules directories searched after the project's ancestors
    #[serde(default = "default_node_paths", alias = "node_paths")]
    pub node_paths: Vec<PathBuf>,
}

impl Default for HexdocConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            vendor_prefix: default_vendor_prefix(),
            out_dir: default_out_dir(),
            entry: default_entry(),
            include_internal: false,
            node_paths: default_node_paths(),
        }
    }
}
