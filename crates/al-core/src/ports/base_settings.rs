//! Base settings port
//!
//! Settings shared by both surfaces and read by the widgets when they
//! render. The Classic surface writes them through the launcher bridge.

use async_trait::async_trait;

#[async_trait]
pub trait BaseSettingsPort: Send + Sync {
    async fn set_active_language(&self, lang_code: &str) -> anyhow::Result<()>;

    async fn set_base_currency(&self, currency: &str) -> anyhow::Result<()>;
}
