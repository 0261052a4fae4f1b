//! # Configuration loader
//!
//! Reads the TOML file into the `AppConfig` DTO. No validation happens here;
//! whatever the file says is taken as-is and empty paths are resolved later
//! during wiring.

use std::path::PathBuf;

use al_core::app_dirs::AppDirs;
use al_core::config::AppConfig;
use anyhow::Context;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "AIRLAUNCH_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the configuration source for this process.
///
/// An explicit path wins; otherwise system defaults rooted at the app data
/// directory are used.
pub fn resolve_config(explicit: Option<PathBuf>, app_dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => Ok(AppConfig::with_system_defaults(
            app_dirs.app_data_root.clone(),
        )),
    }
}
