//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing file yields defaults; an unreadable or invalid one yields
//! defaults plus a warning for the status line.

mod types;

use std::path::{Path, PathBuf};

pub use types::{BindingConfig, Config, DEFAULT_BASE_URL, FieldConfig, ServerConfig};

use crate::error::ConfigError;

const CONFIG_DIR_NAME: &str = "showfinder";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Result of loading configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config location, e.g. `~/.config/showfinder/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration, falling back to defaults on any problem
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
    };

    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{} ({})", e, path.display());
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}. Using defaults.", e)),
            }
        }
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
