//! Recording test doubles shared by the launch integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use al_app::{DeeplinkRouter, LaunchModeFlag, LaunchOrchestrator, LaunchOrchestratorDeps};
use al_core::ports::{
    DeeplinkNavigator, DeeplinkParserPort, GlobalStoragePort, LaunchFlagPort, PersistPolicy,
    SecureStorageCachePort, SurfacePort, WidgetCatalogPort,
};
use al_core::{Deeplink, LaunchIntent};

pub type Journal = Arc<Mutex<Vec<String>>>;

fn record(journal: &Journal, entry: impl Into<String>) {
    journal.lock().unwrap().push(entry.into());
}

pub struct RecordingFlag {
    pub journal: Journal,
    pub value: Mutex<bool>,
}

#[async_trait]
impl LaunchFlagPort for RecordingFlag {
    async fn should_start_on_air(&self) -> anyhow::Result<bool> {
        Ok(*self.value.lock().unwrap())
    }

    async fn set_should_start_on_air(&self, value: bool) -> anyhow::Result<()> {
        record(&self.journal, format!("flag:set:{value}"));
        *self.value.lock().unwrap() = value;
        Ok(())
    }
}

pub struct RecordingGlobalStorage {
    pub journal: Journal,
}

#[async_trait]
impl GlobalStoragePort for RecordingGlobalStorage {
    async fn set_empty_object(&self, key: &str, persist: PersistPolicy) -> anyhow::Result<()> {
        let policy = match persist {
            PersistPolicy::Persist => "persist",
            PersistPolicy::NoPersist => "no_persist",
        };
        record(&self.journal, format!("global:set_empty:{key}:{policy}"));
        Ok(())
    }

    async fn clear_cached_data(&self) -> anyhow::Result<()> {
        record(&self.journal, "global:clear_cached");
        Ok(())
    }
}

pub struct RecordingSecureStorage {
    pub journal: Journal,
}

impl SecureStorageCachePort for RecordingSecureStorage {
    fn clear_cache(&self) {
        record(&self.journal, "secure:clear");
    }
}

pub struct RecordingSurface {
    pub journal: Journal,
}

#[async_trait]
impl SurfacePort for RecordingSurface {
    async fn open_air(&self) -> anyhow::Result<()> {
        record(&self.journal, "surface:open_air");
        Ok(())
    }

    async fn open_classic(&self, intent: &LaunchIntent) -> anyhow::Result<()> {
        record(
            &self.journal,
            format!("surface:open_classic:{}", intent.data.as_deref().unwrap_or("")),
        );
        Ok(())
    }

    async fn present_widget_configuration(
        &self,
        widget_id: i32,
        request_code: i32,
    ) -> anyhow::Result<()> {
        record(&self.journal, format!("surface:widget:{widget_id}:{request_code}"));
        Ok(())
    }

    async fn dismiss_entry(&self) -> anyhow::Result<()> {
        record(&self.journal, "surface:dismiss");
        Ok(())
    }
}

pub struct DataParser;

impl DeeplinkParserPort for DataParser {
    fn parse(&self, intent: &LaunchIntent) -> Option<Deeplink> {
        intent.data.clone().map(Deeplink::new)
    }
}

#[derive(Default)]
pub struct StaticWidgets {
    pub configured: HashSet<i32>,
}

impl WidgetCatalogPort for StaticWidgets {
    fn is_widget_configured(&self, widget_id: i32) -> bool {
        self.configured.contains(&widget_id)
    }

    fn schedule_updates(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn reload_widgets(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub handled: Mutex<Vec<Deeplink>>,
}

impl DeeplinkNavigator for RecordingNavigator {
    fn handle(&self, deeplink: Deeplink) {
        self.handled.lock().unwrap().push(deeplink);
    }
}

#[derive(Clone)]
pub struct Fixture {
    pub journal: Journal,
    pub flag_port: Arc<RecordingFlag>,
    pub mode_flag: Arc<LaunchModeFlag>,
    pub surface: Arc<RecordingSurface>,
    pub router: Arc<DeeplinkRouter>,
    pub widgets: Arc<dyn WidgetCatalogPort>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_widgets(Arc::new(StaticWidgets::default()))
    }

    pub fn with_widgets(widgets: Arc<dyn WidgetCatalogPort>) -> Self {
        let journal: Journal = Arc::new(Mutex::new(Vec::new()));
        let flag_port = Arc::new(RecordingFlag {
            journal: journal.clone(),
            value: Mutex::new(false),
        });

        Self {
            mode_flag: Arc::new(LaunchModeFlag::new(flag_port.clone())),
            flag_port,
            surface: Arc::new(RecordingSurface {
                journal: journal.clone(),
            }),
            router: Arc::new(DeeplinkRouter::new()),
            widgets,
            journal,
        }
    }

    pub fn orchestrator(&self) -> Arc<LaunchOrchestrator> {
        Arc::new(LaunchOrchestrator::from_deps(LaunchOrchestratorDeps {
            mode_flag: self.mode_flag.clone(),
            global_storage: Arc::new(RecordingGlobalStorage {
                journal: self.journal.clone(),
            }),
            secure_storage: Arc::new(RecordingSecureStorage {
                journal: self.journal.clone(),
            }),
            surface: self.surface.clone(),
            router: self.router.clone(),
            deeplink_parser: Arc::new(DataParser),
            widgets: self.widgets.clone(),
        }))
    }

    pub fn entries(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    pub fn persisted_air(&self) -> bool {
        *self.flag_port.value.lock().unwrap()
    }
}
