//! # Dependency wiring
//!
//! The only place that depends on `al-infra`, `al-platform` and `al-app`
//! together. It assembles adapters behind their ports and hands back the
//! launcher entry points. No launch decisions are made here.

use std::path::Path;
use std::sync::{Arc, Weak};

use al_app::app_paths::AppPaths;
use al_app::{
    DeeplinkRouter, LaunchEntry, LaunchModeFlag, LaunchOrchestrator, LaunchOrchestratorDeps,
    LauncherFactory, LauncherRegistry, UpdateBaseSettings, WidgetConfigurationFlow,
};
use al_core::app_dirs::AppDirs;
use al_core::config::AppConfig;
use al_core::ports::{
    AppDirsError, BaseSettingsPort, DeeplinkParserPort, GlobalStoragePort, LaunchFlagPort, SecureStorageCachePort,
    StorageInitPort, SurfacePort, WidgetCatalogPort,
};
use al_infra::{
    FileBaseSettings, FileGlobalStorage, FileLaunchFlagRepository, InMemorySecureStorageCache,
};
use al_platform::adapters::{
    ChannelNavigator, ChannelSurface, InMemoryWidgetCatalog, IntentDeeplinkParser,
};
use al_platform::ipc::HostCommand;
use tokio::sync::{mpsc, watch};
use tracing::{error, info, info_span, Instrument};

/// Capacity of the host command queue.
const HOST_CHANNEL_CAPACITY: usize = 64;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directories unavailable: {0}")]
    AppDirs(#[from] AppDirsError),

    #[error("Data directory initialization failed: {0}")]
    DataDir(String),
}

/// Everything the run loop needs after assembly.
pub struct WiredLauncher {
    pub registry: Arc<LauncherRegistry>,
    pub entry: LaunchEntry,
    pub widget_flow: WidgetConfigurationFlow,
    pub settings: UpdateBaseSettings,
    pub widgets: Arc<InMemoryWidgetCatalog>,
    pub navigator: Arc<ChannelNavigator>,
    pub host_rx: mpsc::Receiver<HostCommand>,
    pub storage_ready: watch::Receiver<bool>,
}

/// Fill every empty path in `config` from the application directories.
///
/// A non-empty `data_dir` replaces the platform data root for the derived paths.
pub fn resolve_app_paths(config: &AppConfig, app_dirs: &AppDirs) -> AppPaths {
    let data_root = non_empty(&config.data_dir).unwrap_or(&app_dirs.app_data_root);
    let defaults = AppPaths::from_app_dirs(&AppDirs {
        app_data_root: data_root.to_path_buf(),
        app_cache_root: app_dirs.app_cache_root.clone(),
    });

    AppPaths {
        launch_config_path: non_empty(&config.launch_config_path)
            .map(Path::to_path_buf)
            .unwrap_or(defaults.launch_config_path),
        global_storage_path: non_empty(&config.global_storage_path)
            .map(Path::to_path_buf)
            .unwrap_or(defaults.global_storage_path),
        base_settings_path: defaults.base_settings_path,
        logs_dir: defaults.logs_dir,
    }
}

fn non_empty(path: &Path) -> Option<&Path> {
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Assemble the launcher and start storage initialization.
///
/// Must be called from within a Tokio runtime.
pub fn wire_launcher(config: &AppConfig, app_dirs: &AppDirs) -> WiringResult<WiredLauncher> {
    let paths = resolve_app_paths(config, app_dirs);

    for path in [
        &paths.launch_config_path,
        &paths.global_storage_path,
        &paths.base_settings_path,
    ] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WiringError::DataDir(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    let (host_tx, host_rx) = mpsc::channel(HOST_CHANNEL_CAPACITY);

    let flag_port: Arc<dyn LaunchFlagPort> = Arc::new(FileLaunchFlagRepository::new(
        paths.launch_config_path.clone(),
    ));
    let mode_flag = Arc::new(LaunchModeFlag::new(flag_port));
    let global_storage = Arc::new(FileGlobalStorage::new(paths.global_storage_path.clone()));
    let secure_storage: Arc<dyn SecureStorageCachePort> =
        Arc::new(InMemorySecureStorageCache::new());
    let surface: Arc<dyn SurfacePort> = Arc::new(ChannelSurface::new(host_tx.clone()));
    let deeplink_parser: Arc<dyn DeeplinkParserPort> = Arc::new(IntentDeeplinkParser::new());
    let widgets = Arc::new(InMemoryWidgetCatalog::new());
    let navigator = Arc::new(ChannelNavigator::new(host_tx));
    // One buffer per process: a deeplink parked by a replaced orchestrator must survive it.
    let router = Arc::new(DeeplinkRouter::new());

    let storage_ready = spawn_storage_init(global_storage.clone());

    let factory: LauncherFactory = {
        let mode_flag = mode_flag.clone();
        let global_storage: Arc<dyn GlobalStoragePort> = global_storage.clone();
        let surface = surface.clone();
        let widget_catalog: Arc<dyn WidgetCatalogPort> = widgets.clone();
        let storage_ready = storage_ready.clone();
        let router = router.clone();

        Arc::new(move || {
            let orchestrator = Arc::new(LaunchOrchestrator::from_deps(LaunchOrchestratorDeps {
                mode_flag: mode_flag.clone(),
                global_storage: global_storage.clone(),
                secure_storage: secure_storage.clone(),
                surface: surface.clone(),
                router: router.clone(),
                deeplink_parser: deeplink_parser.clone(),
                widgets: widget_catalog.clone(),
            }));
            forward_readiness(Arc::downgrade(&orchestrator), storage_ready.clone());
            orchestrator
        })
    };

    let registry = Arc::new(LauncherRegistry::new());
    let entry = LaunchEntry::new(registry.clone(), factory.clone(), mode_flag, surface)
        .with_start_on_air_override(config.start_on_air_override);
    let widget_flow = WidgetConfigurationFlow::new(registry.clone(), factory);
    let base_settings: Arc<dyn BaseSettingsPort> =
        Arc::new(FileBaseSettings::new(paths.base_settings_path.clone()));
    let settings = UpdateBaseSettings::new(base_settings, widgets.clone());

    info!(
        launch_config = %paths.launch_config_path.display(),
        global_storage = %paths.global_storage_path.display(),
        "Launcher wired"
    );

    Ok(WiredLauncher {
        registry,
        entry,
        widget_flow,
        settings,
        widgets,
        navigator,
        host_rx,
        storage_ready,
    })
}

/// Run storage initialization in the background.
///
/// The returned receiver flips to `true` on success and stays `false` on failure.
pub fn spawn_storage_init(storage: Arc<dyn StorageInitPort>) -> watch::Receiver<bool> {
    let (ready_tx, ready_rx) = watch::channel(false);

    tokio::spawn(
        async move {
            match storage.initialize().await {
                Ok(()) => {
                    info!("Storage initialized");
                    ready_tx.send_replace(true);
                }
                Err(err) => {
                    error!(error = %err, "Storage initialization failed, launcher stays gated");
                }
            }
        }
        .instrument(info_span!("bootstrap.storage_init")),
    );

    ready_rx
}

// Signal `mark_ready` on the orchestrator once storage is up, unless it was dropped first.
fn forward_readiness(orchestrator: Weak<LaunchOrchestrator>, mut storage_ready: watch::Receiver<bool>) {
    tokio::spawn(async move {
        if storage_ready.wait_for(|ready| *ready).await.is_err() {
            return;
        }
        if let Some(orchestrator) = orchestrator.upgrade() {
            orchestrator.mark_ready().await;
        }
    });
}
