use crate::config::HexdocConfig;
use crate::error::{ConfigError, Result};

impl HexdocConfig {
    /// Validate configuration before any file is read.
    pub fn validate(&self) -> Result<()> {
        if self.vendor_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "vendorPrefix".to_string(),
                value: format!("{:?}", self.vendor_prefix),
                hint: "An empty prefix would treat every package as a vendor package".to_string(),
            }
            .into());
        }

        if self.entry.is_absolute() {
            return Err(ConfigError::InvalidValue {
                field: "entry".to_string(),
                value: self.entry.display().to_string(),
                hint: "The entry module is relative to each package root (e.g. src/index.js)"
                    .to_string(),
            }
            .into());
        }

        if self.inputs.is_empty() {
            return Err(ConfigError::MissingField {
                field: "inputs".to_string(),
                hint: "Pass files or directories to scan, e.g. `hexdoc generate src`".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
