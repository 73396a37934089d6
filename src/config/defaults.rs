//! Default configuration values for camel-uri-ls.

use log::LevelFilter;

use super::SettingsFile;

pub const CONFIG_DIR_NAME: &str = "camel-uri-ls";
pub const CONFIG_FILE_NAME: &str = "camel-uri-ls.toml";
pub const DEFAULT_INCLUDE_DEPRECATED: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Lowest-precedence settings layer.
pub fn default_settings() -> SettingsFile {
    SettingsFile {
        catalog_path: None,
        include_deprecated: Some(DEFAULT_INCLUDE_DEPRECATED),
        log_level: Some(DEFAULT_LOG_LEVEL.to_string().to_lowercase()),
    }
}
