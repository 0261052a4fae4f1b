use std::sync::Arc;

use al_core::ports::LaunchFlagPort;
use al_core::LaunchMode;
use tracing::{info, warn};

/// Persisted start-mode flag.
///
/// Only the Classic→Air transition is ever written; going back to Classic
/// is a session-only correction and never reaches storage.
pub struct LaunchModeFlag {
    port: Arc<dyn LaunchFlagPort>,
}

impl LaunchModeFlag {
    pub fn new(port: Arc<dyn LaunchFlagPort>) -> Self {
        Self { port }
    }

    /// Mode the next cold start should open.
    ///
    /// An unreadable flag falls back to [`LaunchMode::Classic`].
    pub async fn load(&self) -> LaunchMode {
        match self.port.should_start_on_air().await {
            Ok(flag) => LaunchMode::from_flag(flag),
            Err(err) => {
                warn!(error = %err, "Failed to read launch flag, starting in Classic");
                LaunchMode::Classic
            }
        }
    }

    pub async fn persist_air(&self) -> anyhow::Result<()> {
        self.port.set_should_start_on_air(true).await?;
        info!("Launch flag persisted: start on Air");
        Ok(())
    }
}
