use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use al_core::ports::WidgetCatalogPort;
use anyhow::Result;
use tracing::info;

/// Widget catalog kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryWidgetCatalog {
    configured: RwLock<HashSet<i32>>,
    scheduled: AtomicU64,
    reloads: AtomicU64,
}

impl InMemoryWidgetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_configured(&self, widget_id: i32) {
        self.configured
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(widget_id);
    }

    pub fn scheduled_count(&self) -> u64 {
        self.scheduled.load(Ordering::Relaxed)
    }

    pub fn reload_count(&self) -> u64 {
        self.reloads.load(Ordering::Relaxed)
    }
}

impl WidgetCatalogPort for InMemoryWidgetCatalog {
    fn is_widget_configured(&self, widget_id: i32) -> bool {
        self.configured
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&widget_id)
    }

    fn schedule_updates(&self) -> Result<()> {
        self.scheduled.fetch_add(1, Ordering::Relaxed);
        info!("Widget updates scheduled");
        Ok(())
    }

    fn reload_widgets(&self) -> Result<()> {
        self.reloads.fetch_add(1, Ordering::Relaxed);
        info!("Widgets reloaded");
        Ok(())
    }
}
