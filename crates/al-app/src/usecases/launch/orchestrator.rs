//! Launch orchestrator.
//!
//! Owns the in-memory launch mode and sequences mode switches and widget
//! configuration requests against storage readiness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use al_core::ports::{
    DeeplinkParserPort, GlobalStoragePort, PersistPolicy, SecureStorageCachePort, SurfacePort,
    WidgetCatalogPort, PRICE_HISTORY_KEY,
};
use al_core::{Deeplink, LaunchIntent, LaunchMode, PendingTask};
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::deeplink_router::{DeeplinkRouter, Delivery};
use super::mode_flag::LaunchModeFlag;
use super::readiness_gate::{Admission, ReadyTransition, StorageReadinessGate};

/// What a task did once it actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskReport {
    AirOpened { from_legacy: bool },
    AlreadyOnAir,
    WidgetConfigurationPresented { request_code: i32, widget_id: i32 },
}

/// Result of [`LaunchOrchestrator::switch_to_air`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Air was already active; nothing was touched.
    AlreadyOnAir,
    /// Storage not ready; the switch is parked until it is.
    Deferred,
    /// Air is now active and presented.
    Switched,
}

/// Dependency bundle for [`LaunchOrchestrator`].
pub struct LaunchOrchestratorDeps {
    pub mode_flag: Arc<LaunchModeFlag>,
    pub global_storage: Arc<dyn GlobalStoragePort>,
    pub secure_storage: Arc<dyn SecureStorageCachePort>,
    pub surface: Arc<dyn SurfacePort>,
    pub router: Arc<DeeplinkRouter>,
    pub deeplink_parser: Arc<dyn DeeplinkParserPort>,
    pub widgets: Arc<dyn WidgetCatalogPort>,
}

pub struct LaunchOrchestrator {
    on_the_air: AtomicBool,
    gate: StorageReadinessGate<PendingTask>,

    mode_flag: Arc<LaunchModeFlag>,
    global_storage: Arc<dyn GlobalStoragePort>,
    secure_storage: Arc<dyn SecureStorageCachePort>,
    surface: Arc<dyn SurfacePort>,
    router: Arc<DeeplinkRouter>,
    deeplink_parser: Arc<dyn DeeplinkParserPort>,
    widgets: Arc<dyn WidgetCatalogPort>,
}

impl LaunchOrchestrator {
    pub fn from_deps(deps: LaunchOrchestratorDeps) -> Self {
        let LaunchOrchestratorDeps {
            mode_flag,
            global_storage,
            secure_storage,
            surface,
            router,
            deeplink_parser,
            widgets,
        } = deps;

        Self {
            on_the_air: AtomicBool::new(false),
            gate: StorageReadinessGate::new(),
            mode_flag,
            global_storage,
            secure_storage,
            surface,
            router,
            deeplink_parser,
            widgets,
        }
    }

    pub fn is_on_the_air(&self) -> bool {
        self.on_the_air.load(Ordering::SeqCst)
    }

    pub fn mode(&self) -> LaunchMode {
        LaunchMode::from_flag(self.is_on_the_air())
    }

    /// Force the in-memory mode back to Classic.
    ///
    /// Used when the caller finds Air should not have been entered before
    /// anything was shown. Persisted state and caches are left alone.
    pub fn switching_to_classic(&self) {
        if self.on_the_air.swap(false, Ordering::SeqCst) {
            info!("Launch mode corrected to Classic");
        }
    }

    /// Resolve once storage is ready and any pending task has been replayed.
    pub async fn wait_storage_ready(&self) {
        self.gate.wait_ready().await
    }

    pub async fn pending_task(&self) -> Option<PendingTask> {
        self.gate.pending().await
    }

    pub fn router(&self) -> &Arc<DeeplinkRouter> {
        &self.router
    }

    /// Storage finished initializing.
    ///
    /// The first call replays the pending task; later calls do nothing.
    pub async fn mark_ready(&self) -> ReadyTransition<TaskReport> {
        let span = info_span!("usecase.launch.mark_ready");
        self.gate
            .mark_ready(|task| self.execute(task))
            .instrument(span)
            .await
    }

    pub async fn switch_to_air(&self, from_legacy: bool) -> SwitchOutcome {
        let span = info_span!("usecase.launch.switch_to_air", from_legacy);

        async {
            if self.is_on_the_air() {
                debug!("Already on Air, ignoring switch request");
                return SwitchOutcome::AlreadyOnAir;
            }

            let admission = self
                .gate
                .run_or_defer(PendingTask::ToAir { from_legacy }, |task| self.execute(task))
                .await;

            match admission {
                Admission::Deferred => SwitchOutcome::Deferred,
                Admission::Executed(TaskReport::AlreadyOnAir) => SwitchOutcome::AlreadyOnAir,
                Admission::Executed(_) => SwitchOutcome::Switched,
            }
        }
        .instrument(span)
        .await
    }

    /// Open the configuration surface for `widget_id` once storage is ready.
    ///
    /// The already-configured and invalid-id checks belong to the caller and
    /// must run before this.
    pub async fn present_widget_configuration(
        &self,
        request_code: i32,
        widget_id: i32,
    ) -> Admission<TaskReport> {
        let span = info_span!(
            "usecase.launch.present_widget_configuration",
            request_code,
            widget_id
        );
        let task = PendingTask::ToWidgetConfiguration {
            request_code,
            widget_id,
        };

        self.gate
            .run_or_defer(task, |task| self.execute(task))
            .instrument(span)
            .await
    }

    pub fn handle(&self, deeplink: Deeplink) -> Delivery {
        self.router.handle(deeplink)
    }

    /// Route the deeplink carried by `intent`, if any.
    pub fn handle_intent(&self, intent: &LaunchIntent) -> Option<Delivery> {
        let deeplink = self.deeplink_parser.parse(intent)?;
        Some(self.handle(deeplink))
    }

    pub fn is_widget_configured(&self, widget_id: i32) -> bool {
        self.widgets.is_widget_configured(widget_id)
    }

    pub fn is_valid_widget_id(&self, widget_id: i32) -> bool {
        self.widgets.is_valid_widget_id(widget_id)
    }

    pub fn schedule_widget_updates(&self) {
        if let Err(err) = self.widgets.schedule_updates() {
            warn!(error = %err, "Failed to schedule widget updates");
        }
    }

    pub fn reload_widgets(&self) {
        if let Err(err) = self.widgets.reload_widgets() {
            warn!(error = %err, "Failed to reload widgets");
        }
    }

    // Runs with the gate lock held.
    async fn execute(&self, task: PendingTask) -> TaskReport {
        match task {
            PendingTask::ToAir { from_legacy } => self.soar_into_air(from_legacy).await,
            PendingTask::ToWidgetConfiguration {
                request_code,
                widget_id,
            } => self.open_widget_configuration(request_code, widget_id).await,
        }
    }

    async fn soar_into_air(&self, from_legacy: bool) -> TaskReport {
        if self
            .on_the_air
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Already on Air when task ran, skipping");
            return TaskReport::AlreadyOnAir;
        }

        if from_legacy {
            self.forget_classic_state().await;
        }

        info!("Storage ready, opening Air");
        if let Err(err) = self.surface.open_air().await {
            error!(error = %err, "Failed to present Air surface");
        }

        TaskReport::AirOpened { from_legacy }
    }

    // Caches filled by Classic may hold values computed under Classic assumptions.
    async fn forget_classic_state(&self) {
        if let Err(err) = self
            .global_storage
            .set_empty_object(PRICE_HISTORY_KEY, PersistPolicy::NoPersist)
            .await
        {
            warn!(error = %err, key = PRICE_HISTORY_KEY, "Failed to reset price history cache");
        }

        if let Err(err) = self.mode_flag.persist_air().await {
            error!(error = %err, "Failed to persist Air launch flag");
        }

        self.secure_storage.clear_cache();

        if let Err(err) = self.global_storage.clear_cached_data().await {
            warn!(error = %err, "Failed to clear cached global storage data");
        }
    }

    async fn open_widget_configuration(&self, request_code: i32, widget_id: i32) -> TaskReport {
        info!(widget_id, request_code, "Presenting widget configuration");
        if let Err(err) = self
            .surface
            .present_widget_configuration(widget_id, request_code)
            .await
        {
            error!(error = %err, widget_id, "Failed to present widget configuration");
        }

        TaskReport::WidgetConfigurationPresented {
            request_code,
            widget_id,
        }
    }
}
