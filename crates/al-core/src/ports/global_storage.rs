use async_trait::async_trait;

/// Cached remote price history; its shape differs between Classic and Air.
pub const PRICE_HISTORY_KEY: &str = "tokenPriceHistory.bySlug";

/// Whether a write must reach the persisted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistPolicy {
    Persist,
    NoPersist,
}

/// General key-value storage shared by both surfaces.
#[async_trait]
pub trait GlobalStoragePort: Send + Sync {
    /// Replace the value under `key` with an empty object.
    async fn set_empty_object(&self, key: &str, persist: PersistPolicy) -> anyhow::Result<()>;

    /// Drop every in-memory cached value so the next read hits the snapshot.
    async fn clear_cached_data(&self) -> anyhow::Result<()>;
}
