use crate::cli::{GenerateArgs, ScanArgs};
use crate::config::HexdocConfig;
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "hexdoc.config.json";

/// Prefix of the environment variables read into the config.
pub const ENV_PREFIX: &str = "HEXDOC_";

/// Variables (after the prefix) that map onto config fields.
const ENV_KEYS: &[&str] = &[
    "INPUTS",
    "VENDOR_PREFIX",
    "OUT_DIR",
    "ENTRY",
    "INCLUDE_INTERNAL",
    "NODE_PATHS",
];

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_internal: Option<bool>,
}

impl From<&GenerateArgs> for ConfigOverrides {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            inputs: args.inputs.clone(),
            vendor_prefix: args.prefix.clone(),
            out_dir: args.out_dir.clone(),
            entry: args.entry.clone(),
            // A bare flag can only switch the option on.
            include_internal: args.include_internal.then_some(true),
        }
    }
}

impl From<&ScanArgs> for ConfigOverrides {
    fn from(args: &ScanArgs) -> Self {
        Self {
            inputs: args.inputs.clone(),
            vendor_prefix: args.prefix.clone(),
            ..Self::default()
        }
    }
}

impl HexdocConfig {
    /// Load configuration from multiple sources.
    ///
    /// Priority: CLI args > `HEXDOC_*` environment variables > config file > defaults.
    /// Without `config_path`, `<base_dir>/hexdoc.config.json` is used when it exists.
    pub fn load(
        base_dir: &Path,
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = base_dir.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // HEXDOC_OUT_DIR -> outDir, etc.
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| ENV_KEYS.iter().any(|k| key.as_str().eq_ignore_ascii_case(k)))
                .lowercase(false)
                .map(|key| env_key_to_field(key.as_str()).into()),
        );

        figment = figment.merge(Serialized::defaults(overrides));

        figment
            .extract()
            .map_err(|e| ConfigError::from(e).into())
    }
}

/// `VENDOR_PREFIX` -> `vendorPrefix`
pub(crate) fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !field.is_empty();
        } else if upper_next {
            field.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            field.push(c.to_ascii_lowercase());
        }
    }
    field
}
