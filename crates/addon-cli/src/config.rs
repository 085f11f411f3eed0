//! Configuration file loading.
//!
//! The config lives at `~/.addon-pr.toml` unless `--config` points
//! elsewhere. A missing default config is fine; every setting has a
//! fallback.
//!
//! ```toml
//! [git]
//! parent_dir = "/srv/repo-addons"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Default config filename under the user's home directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".addon-pr.toml";

/// Tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Git repository settings.
    #[serde(default)]
    pub git: GitConfig,
}

/// Location of the addon repositories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitConfig {
    /// Parent directory holding the per-type addon repositories
    /// (`plugins/`, `scripts/`, ...).
    #[serde(default)]
    pub parent_dir: Option<PathBuf>,
}

impl Config {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config from an explicit path, or from the default
    /// location when `path` is `None`. A missing default config yields
    /// the default settings; a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => {
                let Some(default) = dirs::home_dir()
                    .map(|home| home.join(DEFAULT_CONFIG_FILENAME))
                    .filter(|p| p.is_file())
                else {
                    return Ok(Self::default());
                };
                Self::from_toml(&std::fs::read_to_string(default)?)
            }
        }
    }
}
