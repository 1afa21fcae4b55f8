use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::codec::CodecOptions;
use crate::error::{BridgeError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_VAR: &str = "SHAREBRIDGE_CONFIG";

const ENV_PREFIX: &str = "SHAREBRIDGE";

/// Bridge settings, layered as defaults < config file < environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub pretty: bool,
    pub strict: bool,
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            strict: true,
            log_level: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Load from the default location
    pub fn load() -> Result<Self> {
        let path = default_config_path()?;
        Self::load_from(Some(path.as_path()))
    }

    /// Load from an explicit file. A missing file falls back to defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("pretty", defaults.pretty)?
            .set_default("strict", defaults.strict)?
            .set_default("log_level", defaults.log_level)?;

        // Always TOML, whatever the file extension
        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            pretty: self.pretty,
            strict: self.strict,
        }
    }
}

/// Config file path: `SHAREBRIDGE_CONFIG` if set, else the user config directory
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_VAR) {
        return Ok(PathBuf::from(path));
    }

    let base_dir = dirs::config_dir().ok_or(BridgeError::ConfigDirUnavailable)?;
    Ok(base_dir.join("sharebridge").join("config.toml"))
}
