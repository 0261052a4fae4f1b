//! Launch flag port
//!
//! Persists the single boolean that decides which surface the next cold
//! start opens. Implementations are provided by the infrastructure layer.

use async_trait::async_trait;

#[async_trait]
pub trait LaunchFlagPort: Send + Sync {
    /// Read the persisted flag. A missing record reads as `false`.
    async fn should_start_on_air(&self) -> anyhow::Result<bool>;

    /// Persist the flag.
    async fn set_should_start_on_air(&self, value: bool) -> anyhow::Result<()>;
}
