use std::path::PathBuf;

use al_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub launch_config_path: PathBuf,
    pub global_storage_path: PathBuf,
    pub base_settings_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            launch_config_path: dirs.app_data_root.join("launch_config.json"),
            global_storage_path: dirs.app_data_root.join("global_storage.json"),
            base_settings_path: dirs.app_data_root.join("base_settings.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/airlaunch"),
            app_cache_root: PathBuf::from("/tmp/cache/airlaunch"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(
            paths.launch_config_path,
            PathBuf::from("/tmp/airlaunch/launch_config.json")
        );
        assert_eq!(
            paths.global_storage_path,
            PathBuf::from("/tmp/airlaunch/global_storage.json")
        );
        assert_eq!(
            paths.base_settings_path,
            PathBuf::from("/tmp/airlaunch/base_settings.json")
        );
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/airlaunch/logs"));
    }
}
