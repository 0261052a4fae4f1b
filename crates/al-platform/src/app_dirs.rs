use std::path::PathBuf;

use al_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "airlaunch";
const PROFILE_ENV: &str = "AL_PROFILE";

/// Directory name for the active profile, e.g. `airlaunch-dev` for `AL_PROFILE=dev`.
fn profile_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.trim().is_empty() => {
            format!("{APP_DIR_NAME}-{}", profile.trim())
        }
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves launcher directories from the platform conventions in `dirs`.
#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    data_base_override: Option<PathBuf>,
    cache_base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `data` and `cache` as base directories instead of the system ones.
    ///
    /// The profile suffix is still applied underneath them.
    pub fn with_base_dirs(data: PathBuf, cache: PathBuf) -> Self {
        Self {
            data_base_override: Some(data),
            cache_base_override: Some(cache),
        }
    }

    fn data_base(&self) -> Option<PathBuf> {
        self.data_base_override.clone().or_else(dirs::data_local_dir)
    }

    fn cache_base(&self) -> Option<PathBuf> {
        self.cache_base_override.clone().or_else(dirs::cache_dir)
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let data = self
            .data_base()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let cache = self.cache_base().ok_or(AppDirsError::CacheDirUnavailable)?;
        let name = profile_dir_name();

        Ok(AppDirs {
            app_data_root: data.join(&name),
            app_cache_root: cache.join(&name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var(PROFILE_ENV).ok();

        match value {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }
        let result = f();
        match previous {
            Some(profile) => std::env::set_var(PROFILE_ENV, profile),
            None => std::env::remove_var(PROFILE_ENV),
        }

        result
    }

    fn adapter() -> DirsAppDirsAdapter {
        DirsAppDirsAdapter::with_base_dirs(PathBuf::from("/data"), PathBuf::from("/cache"))
    }

    #[test]
    fn default_profile_uses_plain_app_name() {
        let dirs = with_profile(None, || adapter().get_app_dirs().unwrap());

        assert_eq!(dirs.app_data_root, PathBuf::from("/data/airlaunch"));
        assert_eq!(dirs.app_cache_root, PathBuf::from("/cache/airlaunch"));
    }

    #[test]
    fn blank_profile_is_ignored() {
        let dirs = with_profile(Some("  "), || adapter().get_app_dirs().unwrap());

        assert_eq!(dirs.app_data_root, PathBuf::from("/data/airlaunch"));
    }

    #[test]
    fn profiles_are_isolated() {
        let a = with_profile(Some("a"), || adapter().get_app_dirs().unwrap());
        let b = with_profile(Some("b"), || adapter().get_app_dirs().unwrap());

        assert_eq!(a.app_data_root, PathBuf::from("/data/airlaunch-a"));
        assert_eq!(b.app_cache_root, PathBuf::from("/cache/airlaunch-b"));
        assert_ne!(a.app_data_root, b.app_data_root);
    }
}
