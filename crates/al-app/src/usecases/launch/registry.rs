use std::sync::{Arc, RwLock};

use tracing::info;

use super::orchestrator::LaunchOrchestrator;

/// Builds a fresh orchestrator together with its storage initialization.
pub type LauncherFactory = Arc<dyn Fn() -> Arc<LaunchOrchestrator> + Send + Sync>;

/// Shared slot holding the orchestrator every entry point talks to.
///
/// Owned by the composition root and handed to entry points explicitly.
/// The held instance is replaceable: an entry point that finds none (or
/// decides to start over) installs a new one.
#[derive(Default)]
pub struct LauncherRegistry {
    current: RwLock<Option<Arc<LaunchOrchestrator>>>,
}

impl LauncherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<LaunchOrchestrator>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Install `orchestrator` as the shared instance, returning the previous one.
    pub fn install(&self, orchestrator: Arc<LaunchOrchestrator>) -> Option<Arc<LaunchOrchestrator>> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = current.replace(orchestrator);
        info!(replaced = previous.is_some(), "Launch orchestrator installed");
        previous
    }

    /// Return the shared instance, building and installing one if absent.
    pub fn get_or_install_with(&self, factory: &LauncherFactory) -> Arc<LaunchOrchestrator> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(existing) = current.as_ref() {
            return existing.clone();
        }

        let orchestrator = factory();
        *current = Some(orchestrator.clone());
        info!("Launch orchestrator created on demand");
        orchestrator
    }
}
