use async_trait::async_trait;

use crate::ports::errors::StorageInitError;

/// One-time asynchronous initialization of the storage subsystem.
///
/// The composition root runs this on a background task and signals the
/// launcher once it returns `Ok`.
#[async_trait]
pub trait StorageInitPort: Send + Sync {
    async fn initialize(&self) -> Result<(), StorageInitError>;
}
