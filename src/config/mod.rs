//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::resolver::MIN_SDK_REQUIRING_PUBLIC_ALTERNATIVES;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".apialt.config.json";

fn default_min_sdk() -> u32 {
    MIN_SDK_REQUIRING_PUBLIC_ALTERNATIVES
}

fn default_true() -> bool {
    true
}

/// @acp:summary "Main configuration structure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// SDK level from which hidden members must document an alternative
    #[serde(default = "default_min_sdk")]
    pub min_sdk_requiring_alternative: u32,

    /// Default public API list, used when no `--public-apis` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_apis: Option<PathBuf>,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_sdk_requiring_alternative: default_min_sdk(),
            public_apis: None,
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, otherwise use defaults"
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Public API list path: explicit argument first, then config
    pub fn public_apis_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.public_apis.clone())
    }
}

/// @acp:summary "Terminal output settings"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub colors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}
