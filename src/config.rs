pub mod defaults;
pub mod load;
pub mod settings;
pub mod user;

pub use load::{SettingsEvent, SettingsEventKind, SettingsLoadOutcome, load_settings};
pub use settings::{CompletionSettings, SettingsFile};
pub use user::{load_user_config, user_config_path};

/// Merge every layer in order; later layers override earlier ones.
pub fn merge_all(configs: &[Option<SettingsFile>]) -> Option<SettingsFile> {
    configs.iter().cloned().reduce(merge_settings).flatten()
}

/// Merge two settings files, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<SettingsFile>,
    primary: Option<SettingsFile>,
) -> Option<SettingsFile> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(SettingsFile {
            catalog_path: primary.catalog_path.or(fallback.catalog_path),
            include_deprecated: primary.include_deprecated.or(fallback.include_deprecated),
            log_level: primary.log_level.or(fallback.log_level),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn with_catalog(path: &str) -> SettingsFile {
        SettingsFile {
            catalog_path: Some(PathBuf::from(path)),
            ..Default::default()
        }
    }

    #[test]
    fn primary_values_win() {
        let merged = merge_settings(Some(with_catalog("/a")), Some(with_catalog("/b"))).unwrap();
        assert_eq!(merged.catalog_path, Some(PathBuf::from("/b")));
    }

    #[test]
    fn missing_primary_values_fall_back() {
        let fallback = SettingsFile {
            include_deprecated: Some(false),
            log_level: Some("debug".to_string()),
            ..with_catalog("/a")
        };
        let merged = merge_settings(Some(fallback), Some(with_catalog("/b"))).unwrap();

        assert_eq!(merged.catalog_path, Some(PathBuf::from("/b")));
        assert_eq!(merged.include_deprecated, Some(false));
        assert_eq!(merged.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn merge_all_skips_empty_layers() {
        let merged = merge_all(&[None, Some(with_catalog("/a")), None]).unwrap();
        assert_eq!(merged.catalog_path, Some(PathBuf::from("/a")));
        assert!(merge_all(&[None, None]).is_none());
    }
}
