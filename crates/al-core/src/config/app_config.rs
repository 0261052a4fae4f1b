use std::path::PathBuf;

/// Launcher configuration DTO (pure data, no logic)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Forces the start mode regardless of the persisted flag.
    /// `None` means "use whatever the launch flag says".
    pub start_on_air_override: Option<bool>,

    /// Data directory (path info only, no existence check)
    pub data_dir: PathBuf,

    /// Launch flag file path
    pub launch_config_path: PathBuf,

    /// Global storage snapshot path
    pub global_storage_path: PathBuf,

    /// Mirror log output into `<data_dir>/logs`
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    /// Empty paths are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let path_at = |section: &str, key: &str| {
            PathBuf::from(
                toml_value
                    .get(section)
                    .and_then(|s| s.get(key))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            )
        };

        Ok(Self {
            start_on_air_override: toml_value
                .get("general")
                .and_then(|g| g.get("start_on_air_override"))
                .and_then(|v| v.as_bool()),
            data_dir: path_at("storage", "data_dir"),
            launch_config_path: path_at("storage", "launch_config_path"),
            global_storage_path: path_at("storage", "global_storage_path"),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            start_on_air_override: None,
            data_dir: PathBuf::new(),
            launch_config_path: PathBuf::new(),
            global_storage_path: PathBuf::new(),
            file_logging: false,
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// The base directory should be computed by the caller using
    /// platform-specific logic (e.g., the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            start_on_air_override: None,
            launch_config_path: data_dir.join("launch_config.json"),
            global_storage_path: data_dir.join("global_storage.json"),
            data_dir,
            file_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_returns_empty_paths_when_missing() {
        let toml_str = r#"
            [storage]
            # everything is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.data_dir, PathBuf::new());
        assert_eq!(config.launch_config_path, PathBuf::new());
        assert_eq!(config.start_on_air_override, None);
        assert!(!config.file_logging);
    }

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [general]
            start_on_air_override = true

            [storage]
            data_dir = "/data"
            launch_config_path = "/data/launch.json"
            global_storage_path = "/data/global.json"

            [logging]
            file_logging = true
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.start_on_air_override, Some(true));
        assert_eq!(config.data_dir, PathBuf::from("/data"));
        assert_eq!(config.launch_config_path, PathBuf::from("/data/launch.json"));
        assert_eq!(config.global_storage_path, PathBuf::from("/data/global.json"));
        assert!(config.file_logging);
    }

    #[test]
    fn test_from_toml_ignores_non_bool_override() {
        // Wrong type is not an error, it is simply absent
        let toml_value: Value = toml::from_str(
            r#"
            [general]
            start_on_air_override = "yes"
        "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.start_on_air_override, None);
    }

    #[test]
    fn test_empty_creates_valid_dto() {
        let config = AppConfig::empty();

        assert_eq!(config.data_dir, PathBuf::new());
        assert_eq!(config.start_on_air_override, None);
        assert!(!config.file_logging);
    }

    #[test]
    fn test_with_system_defaults_creates_valid_paths() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/test"));
        assert_eq!(
            config.launch_config_path,
            PathBuf::from("/tmp/test/launch_config.json")
        );
        assert_eq!(
            config.global_storage_path,
            PathBuf::from("/tmp/test/global_storage.json")
        );
        assert!(config.file_logging);
    }
}
