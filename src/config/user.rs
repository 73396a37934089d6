//! User configuration loading for camel-uri-ls.
//!
//! User config location: $XDG_CONFIG_HOME/camel-uri-ls/camel-uri-ls.toml
//! Fallback: the platform config directory (`~/.config` on Linux).

use std::fs;
use std::path::PathBuf;

use super::SettingsFile;
use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{ConfigError, ConfigResult};

/// Returns the path to the user configuration file, or `None` if no config
/// directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg_config) if !xdg_config.is_empty() => PathBuf::from(xdg_config),
        _ => dirs::config_dir()?,
    };
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the user configuration. A missing file is `Ok(None)`.
pub fn load_user_config() -> ConfigResult<Option<SettingsFile>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path, source })
}
