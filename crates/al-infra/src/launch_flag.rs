//! File-based launch flag repository
//!
//! Persists the "start on Air" flag to a small JSON file in the application
//! data directory.

use async_trait::async_trait;
use al_core::ports::LaunchFlagPort;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchConfigRecord {
    #[serde(default)]
    should_start_on_air: bool,
}

pub struct FileLaunchFlagRepository {
    config_file_path: PathBuf,
}

impl FileLaunchFlagRepository {
    /// Create repository with custom file path
    pub fn new(config_file_path: PathBuf) -> Self {
        Self { config_file_path }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.config_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn read_record(&self) -> anyhow::Result<LaunchConfigRecord> {
        if !self.config_file_path.exists() {
            return Ok(LaunchConfigRecord::default());
        }

        let content = fs::read_to_string(&self.config_file_path).await?;
        if content.trim().is_empty() {
            return Ok(LaunchConfigRecord::default());
        }

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse launch config: {}", e))
    }
}

#[async_trait]
impl LaunchFlagPort for FileLaunchFlagRepository {
    async fn should_start_on_air(&self) -> anyhow::Result<bool> {
        Ok(self.read_record().await?.should_start_on_air)
    }

    async fn set_should_start_on_air(&self, value: bool) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let record = LaunchConfigRecord {
            should_start_on_air: value,
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize launch config: {}", e))?;

        let mut file = fs::File::create(&self.config_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create launch config file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write launch config file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync launch config file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_reads_as_classic() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileLaunchFlagRepository::new(temp_dir.path().join("nonexistent.json"));

        assert!(!repo.should_start_on_air().await.unwrap());
    }

    #[tokio::test]
    async fn set_then_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileLaunchFlagRepository::new(temp_dir.path().join("launch.json"));

        repo.set_should_start_on_air(true).await.unwrap();
        assert!(repo.should_start_on_air().await.unwrap());

        repo.set_should_start_on_air(false).await.unwrap();
        assert!(!repo.should_start_on_air().await.unwrap());
    }

    #[tokio::test]
    async fn record_uses_camel_case_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("launch.json");
        let repo = FileLaunchFlagRepository::new(path.clone());

        repo.set_should_start_on_air(true).await.unwrap();

        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"shouldStartOnAir\": true"));
    }

    #[tokio::test]
    async fn creates_missing_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/data/launch_config.json");
        let repo = FileLaunchFlagRepository::new(path.clone());

        repo.set_should_start_on_air(true).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn empty_file_reads_as_classic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "").await.unwrap();

        let repo = FileLaunchFlagRepository::new(path);
        assert!(!repo.should_start_on_air().await.unwrap());
    }

    #[tokio::test]
    async fn invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "{invalid json").await.unwrap();

        let repo = FileLaunchFlagRepository::new(path);
        let result = repo.should_start_on_air().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
