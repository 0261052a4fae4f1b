use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("system cache directory is unavailable")]
    CacheDirUnavailable,
}

/// Failures reported by the storage subsystem while it initializes.
#[derive(Debug, Error)]
pub enum StorageInitError {
    #[error("storage snapshot unreadable: {0}")]
    Unreadable(String),

    #[error("storage snapshot corrupt: {0}")]
    Corrupt(String),
}
