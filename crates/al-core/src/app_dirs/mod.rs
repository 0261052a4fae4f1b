use std::path::PathBuf;

/// Resolved application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_cache_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dirs_is_pure_fact_container() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/airlaunch"),
            app_cache_root: PathBuf::from("/tmp/cache/airlaunch"),
        };
        assert!(dirs.app_data_root.ends_with("airlaunch"));
        assert!(dirs.app_cache_root.ends_with("airlaunch"));
    }
}
