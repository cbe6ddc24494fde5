//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>` / `BX_CONFIG`, else `$XDG_CONFIG_HOME/bx/bx.toml` if present
//! 3. Environment variables: `BX_<SECTION>__<KEY>` (e.g. `BX_WALLET__NETWORK=testnet`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Network;

/// Key encoding defaults used by wallet commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalletConfig {
    /// Network whose version bytes are used for WIF encoding
    pub network: Network,
    /// Emit compressed public keys and WIF by default
    pub compressed: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            compressed: true,
        }
    }
}

/// Unified configuration for bx.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub wallet: WalletConfig,
}

/// Get the XDG config directory for bx.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bx").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bx.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_path` - Explicit settings file; it must exist when given
    ///
    /// Without an explicit path the global XDG file is used when present.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let file = match config_path {
            Some(path) => {
                let path = expand_path(path);
                if !path.is_file() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                Some(path)
            }
            None => global_config_path().filter(|path| path.is_file()),
        };

        let mut builder = Config::builder();
        if let Some(path) = file {
            debug!("loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("BX")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
