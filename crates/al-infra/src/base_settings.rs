//! File-based base settings
//!
//! Keeps the active language and base currency in a small JSON file next to
//! the launch flag. Updates are read-modify-write and serialized in-process.

use std::path::PathBuf;

use al_core::ports::BaseSettingsPort;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_BASE_SETTINGS_FILE: &str = "base_settings.json";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaseSettingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_currency: Option<String>,
}

pub struct FileBaseSettings {
    settings_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBaseSettings {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_record(&self) -> anyhow::Result<BaseSettingsRecord> {
        if !self.settings_path.exists() {
            return Ok(BaseSettingsRecord::default());
        }

        let content = fs::read_to_string(&self.settings_path)
            .await
            .with_context(|| format!("Failed to read {}", self.settings_path.display()))?;
        if content.trim().is_empty() {
            return Ok(BaseSettingsRecord::default());
        }

        serde_json::from_str(&content).context("Failed to parse base settings")
    }

    async fn update(&self, apply: impl FnOnce(&mut BaseSettingsRecord)) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut record = self.read_record().await?;
        apply(&mut record);

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&record)?;
        let tmp_path = self.settings_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.settings_path)
            .await
            .context("Failed to replace base settings file")?;

        debug!(?record, "Base settings updated");
        Ok(())
    }
}

#[async_trait]
impl BaseSettingsPort for FileBaseSettings {
    async fn set_active_language(&self, lang_code: &str) -> anyhow::Result<()> {
        let lang_code = lang_code.to_string();
        self.update(|record| record.active_language = Some(lang_code))
            .await
    }

    async fn set_base_currency(&self, currency: &str) -> anyhow::Result<()> {
        let currency = currency.to_string();
        self.update(|record| record.base_currency = Some(currency))
            .await
    }
}
