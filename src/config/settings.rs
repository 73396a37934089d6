use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_INCLUDE_DEPRECATED, DEFAULT_LOG_LEVEL};

/// One layer of configuration as written in `camel-uri-ls.toml` or sent as
/// initialization options. Every field is optional so layers can be merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    /// Directory of component JSON schemas, or a single JSON file.
    pub catalog_path: Option<PathBuf>,
    /// Offer deprecated components at all.
    pub include_deprecated: Option<bool>,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`.
    pub log_level: Option<String>,
}

/// Effective settings after merging all layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSettings {
    pub catalog_path: Option<PathBuf>,
    pub include_deprecated: bool,
    pub log_level: LevelFilter,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            include_deprecated: DEFAULT_INCLUDE_DEPRECATED,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl From<SettingsFile> for CompletionSettings {
    fn from(file: SettingsFile) -> Self {
        let log_level = file
            .log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            catalog_path: file.catalog_path,
            include_deprecated: file.include_deprecated.unwrap_or(DEFAULT_INCLUDE_DEPRECATED),
            log_level,
        }
    }
}
