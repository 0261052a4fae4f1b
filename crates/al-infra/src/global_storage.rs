//! File-backed global key-value storage.
//!
//! Values live in a JSON object snapshot on disk and are read through an
//! in-memory cache. The cache is filled by [`StorageInitPort::initialize`]
//! and refilled lazily after [`GlobalStoragePort::clear_cached_data`].

use std::io;
use std::path::PathBuf;

use al_core::ports::{GlobalStoragePort, PersistPolicy, StorageInitError, StorageInitPort};
use anyhow::Context;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path} does not hold a JSON object")]
    NotAnObject { path: PathBuf },
}

impl From<SnapshotError> for StorageInitError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Read { .. } => StorageInitError::Unreadable(err.to_string()),
            SnapshotError::Parse { .. } | SnapshotError::NotAnObject { .. } => {
                StorageInitError::Corrupt(err.to_string())
            }
        }
    }
}

type Snapshot = Map<String, Value>;

pub struct FileGlobalStorage {
    snapshot_path: PathBuf,
    cache: RwLock<Option<Snapshot>>,
}

impl FileGlobalStorage {
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Read a value, loading the snapshot if the cache is cold.
    pub async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        if let Some(cache) = self.cache.read().await.as_ref() {
            return Ok(cache.get(key).cloned());
        }

        let mut cache = self.cache.write().await;
        if cache.is_none() {
            *cache = Some(self.read_snapshot().await?);
        }
        Ok(cache.as_ref().and_then(|c| c.get(key).cloned()))
    }

    /// Store `value` under `key`, writing it through to disk when `persist` says so.
    pub async fn set(&self, key: &str, value: Value, persist: PersistPolicy) -> anyhow::Result<()> {
        {
            let mut cache = self.cache.write().await;
            if cache.is_none() {
                *cache = Some(self.read_snapshot().await?);
            }
            if let Some(cache) = cache.as_mut() {
                cache.insert(key.to_string(), value.clone());
            }
        }

        if persist == PersistPolicy::Persist {
            let mut snapshot = self.read_snapshot().await?;
            snapshot.insert(key.to_string(), value);
            self.write_snapshot(&snapshot).await?;
        }
        Ok(())
    }

    async fn read_snapshot(&self) -> Result<Snapshot, SnapshotError> {
        let content = match fs::read_to_string(&self.snapshot_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Snapshot::new()),
            Err(source) => {
                return Err(SnapshotError::Read {
                    path: self.snapshot_path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Snapshot::new());
        }

        match serde_json::from_str(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SnapshotError::NotAnObject {
                path: self.snapshot_path.clone(),
            }),
            Err(source) => Err(SnapshotError::Parse {
                path: self.snapshot_path.clone(),
                source,
            }),
        }
    }

    async fn write_snapshot(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if let Some(dir) = self.snapshot_path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create storage dir failed: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(snapshot).context("serialize storage failed")?;
        let tmp_path = self.snapshot_path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp storage failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.snapshot_path)
            .await
            .with_context(|| {
                format!(
                    "rename temp storage to target failed: {} -> {}",
                    tmp_path.display(),
                    self.snapshot_path.display()
                )
            })?;
        Ok(())
    }
}

#[async_trait]
impl StorageInitPort for FileGlobalStorage {
    async fn initialize(&self) -> Result<(), StorageInitError> {
        let snapshot = self.read_snapshot().await?;
        info!(
            path = %self.snapshot_path.display(),
            keys = snapshot.len(),
            "Global storage loaded"
        );
        *self.cache.write().await = Some(snapshot);
        Ok(())
    }
}

#[async_trait]
impl GlobalStoragePort for FileGlobalStorage {
    async fn set_empty_object(&self, key: &str, persist: PersistPolicy) -> anyhow::Result<()> {
        self.set(key, Value::Object(Map::new()), persist).await
    }

    async fn clear_cached_data(&self) -> anyhow::Result<()> {
        debug!("Dropping cached global storage data");
        *self.cache.write().await = None;
        Ok(())
    }
}
